//! Core types and structures for domain-sweep

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{ConfigReason, DomainSweepError, Result};

/// Longest label the DNS allows (RFC 1035)
pub const MAX_LABEL_LENGTH: usize = 63;

/// Character set used to build labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// Only digits (0-9)
    Numbers,
    /// Only lowercase letters (a-z)
    Letters,
    /// Letters and digits (a-z, 0-9)
    Alphanumeric,
}

impl Charset {
    pub fn chars(&self) -> &'static [char] {
        match self {
            Charset::Numbers => &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
            Charset::Letters => &[
                'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
                'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
            ],
            Charset::Alphanumeric => &[
                'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
                'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
                '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
            ],
        }
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::Alphanumeric
    }
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Charset::Numbers => write!(f, "numbers"),
            Charset::Letters => write!(f, "letters"),
            Charset::Alphanumeric => write!(f, "alphanumeric"),
        }
    }
}

impl FromStr for Charset {
    type Err = DomainSweepError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "numbers" => Ok(Charset::Numbers),
            "letters" => Ok(Charset::Letters),
            "alphanumeric" => Ok(Charset::Alphanumeric),
            other => Err(DomainSweepError::config(
                ConfigReason::UnknownCharset,
                format!("unknown charset '{}', expected one of: numbers, letters, alphanumeric", other),
            )),
        }
    }
}

/// Policy governing how the hyphen participates in generated labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HyphenMode {
    /// Hyphens may appear anywhere but first and last position
    With,
    /// Hyphens are excluded entirely
    Without,
    /// Every label must contain at least one hyphen
    Only,
}

impl Default for HyphenMode {
    fn default() -> Self {
        Self::With
    }
}

impl std::fmt::Display for HyphenMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HyphenMode::With => write!(f, "with"),
            HyphenMode::Without => write!(f, "without"),
            HyphenMode::Only => write!(f, "only"),
        }
    }
}

impl FromStr for HyphenMode {
    type Err = DomainSweepError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "with" => Ok(HyphenMode::With),
            "without" => Ok(HyphenMode::Without),
            "only" => Ok(HyphenMode::Only),
            other => Err(DomainSweepError::config(
                ConfigReason::UnknownHyphenMode,
                format!("unknown hyphen mode '{}', expected one of: with, without, only", other),
            )),
        }
    }
}

/// Configuration for brute-force label generation
///
/// Built once, validated before the engine is constructed, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub charset: Charset,
    pub min_length: usize,
    pub max_length: usize,
    pub hyphen_mode: HyphenMode,
    pub tld: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            charset: Charset::Alphanumeric,
            min_length: 2,
            max_length: 4,
            hyphen_mode: HyphenMode::With,
            tld: "lt".to_string(),
        }
    }
}

impl GenerationConfig {
    /// Check every construction invariant, failing fast on the first violation
    pub fn validate(&self) -> Result<()> {
        if self.min_length < 1 {
            return Err(DomainSweepError::config(
                ConfigReason::MinLengthZero,
                "min_length must be at least 1",
            ));
        }
        if self.min_length > self.max_length {
            return Err(DomainSweepError::config(
                ConfigReason::LengthRangeInverted,
                format!(
                    "min_length {} is greater than max_length {}",
                    self.min_length, self.max_length
                ),
            ));
        }
        if self.max_length > MAX_LABEL_LENGTH {
            return Err(DomainSweepError::config(
                ConfigReason::LabelTooLong,
                format!(
                    "max_length {} exceeds the DNS label limit of {}",
                    self.max_length, MAX_LABEL_LENGTH
                ),
            ));
        }
        if self.tld.trim().is_empty() {
            return Err(DomainSweepError::config(
                ConfigReason::EmptyTld,
                "tld must not be empty",
            ));
        }
        Ok(())
    }
}
