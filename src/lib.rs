//! Domain Sweep - exhaustive domain name label generation
//!
//! A simple CLI tool and library for enumerating every candidate domain label
//! over a character set and length range, with exact count estimation before
//! anything is written.

pub mod brute;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use brute::{Alphabet, BruteForceGenerator, Labels};
pub use error::{ConfigReason, DomainSweepError, Result};
pub use types::{Charset, GenerationConfig, HyphenMode, MAX_LABEL_LENGTH};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
