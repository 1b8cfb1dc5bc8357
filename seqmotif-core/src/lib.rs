//! Core utilities and types shared across all seqmotif crates

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, save_config, Config};
pub use error::{SeqmotifError, SeqmotifResult};
pub use logging::init_logging;
pub use types::{AlignmentMode, MotifStrategy};

/// Version information for the seqmotif project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
