// Utility Module
// Configuration and logging used by the command-line front-end

pub mod config;
pub mod logging;

pub use config::{AlphabetKind, CodecConfig, DEFAULT_BLOCK_LENGTH};
pub use logging::setup_logging;
