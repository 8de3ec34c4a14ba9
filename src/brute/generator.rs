//! Brute-force generator for domain name labels

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::Alphabet;
use crate::error::Result;
use crate::types::{GenerationConfig, HyphenMode};

/// Shortest label that can hold an interior hyphen
const MIN_HYPHENATED_LENGTH: usize = 3;

/// Engine for exhaustive label generation
///
/// Validates its configuration up front, derives the symbol table once,
/// and then serves any number of independent enumeration passes. Each
/// pass walks the label space length by length in a fixed order, so two
/// passes over the same generator (or over two generators built from the
/// same configuration) yield identical sequences.
pub struct BruteForceGenerator {
    config: GenerationConfig,
    alphabet: Alphabet,
}

impl BruteForceGenerator {
    /// Create a new generator, failing fast on an invalid configuration
    pub fn new(config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        let alphabet = Alphabet::derive(config.charset, config.hyphen_mode);
        tracing::debug!(
            charset = %config.charset,
            hyphen_mode = %config.hyphen_mode,
            min = config.min_length,
            max = config.max_length,
            tld = %config.tld,
            "brute-force generator ready"
        );
        Ok(Self { config, alphabet })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Exact number of labels an enumeration pass will yield
    ///
    /// Closed-form, never enumerates. Saturates at `u128::MAX` for ranges
    /// near the DNS length ceiling, where the true count does not fit.
    pub fn estimate_count(&self) -> u128 {
        (self.config.min_length..=self.config.max_length)
            .map(|length| self.count_for_length(length))
            .fold(0u128, |total, count| total.saturating_add(count))
    }

    /// Count of valid labels of exactly `length` characters
    ///
    /// With `B` base symbols: hyphen-free strings number `B^L`. Strings
    /// that tolerate interior hyphens keep the first and last position
    /// restricted to base symbols, giving `B * B * (B+1)^(L-2)` for
    /// `L >= 2` and `B` for `L = 1`. Hyphen-required strings are the
    /// difference of the two, and no legal placement exists below length 3.
    fn count_for_length(&self, length: usize) -> u128 {
        let base = self.alphabet.base_len() as u128;
        match self.config.hyphen_mode {
            HyphenMode::Without => hyphen_free(base, length),
            HyphenMode::With => hyphen_tolerant(base, length),
            HyphenMode::Only => {
                if length < MIN_HYPHENATED_LENGTH {
                    0
                } else {
                    hyphen_tolerant(base, length).saturating_sub(hyphen_free(base, length))
                }
            }
        }
    }

    /// Start a fresh enumeration pass over all valid labels
    pub fn labels(&self) -> Labels<'_> {
        Labels::new(&self.alphabet, self.config.min_length, self.config.max_length)
    }

    /// Write every label as `<label>.<tld>`, one per line, to `dest`
    ///
    /// Lines are formatted whole before they reach the writer and the
    /// writer is flushed before returning. Returns the number of lines
    /// written.
    pub fn write_to<W: Write>(&self, dest: &mut W) -> Result<u64> {
        let mut count = 0u64;
        for label in self.labels() {
            writeln!(dest, "{}.{}", label, self.config.tld)?;
            count += 1;
        }
        dest.flush()?;
        tracing::debug!(count, "label enumeration written");
        Ok(count)
    }

    /// Generate all labels into a file, returning the number of lines written
    pub fn generate_to_file(&self, path: impl AsRef<Path>) -> Result<u64> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| crate::error::DomainSweepError::from(e).with_path(path.display().to_string()))?;
        let mut writer = BufWriter::new(file);
        let count = self
            .write_to(&mut writer)
            .map_err(|e| e.with_path(path.display().to_string()))?;
        tracing::info!(count, path = %path.display(), "generation complete");
        Ok(count)
    }
}

fn hyphen_free(base: u128, length: usize) -> u128 {
    base.saturating_pow(length as u32)
}

fn hyphen_tolerant(base: u128, length: usize) -> u128 {
    if length == 1 {
        base
    } else {
        base.saturating_mul(base)
            .saturating_mul((base + 1).saturating_pow(length as u32 - 2))
    }
}

/// One enumeration pass over the valid labels of a generator
///
/// A mixed-radix odometer over the symbol table: the digit vector is the
/// current candidate, advanced with carry from the rightmost position and
/// grown by one digit when a length is exhausted. Candidates failing the
/// hyphen rules are skipped without being rendered.
pub struct Labels<'a> {
    alphabet: &'a Alphabet,
    max_length: usize,
    digits: Vec<usize>,
    done: bool,
}

impl<'a> Labels<'a> {
    fn new(alphabet: &'a Alphabet, min_length: usize, max_length: usize) -> Self {
        let mut start = min_length;
        // Lengths below 3 cannot hold an interior hyphen
        if alphabet.requires_hyphen() && start < MIN_HYPHENATED_LENGTH {
            start = MIN_HYPHENATED_LENGTH;
        }
        Self {
            alphabet,
            max_length,
            digits: vec![0; start],
            done: start > max_length,
        }
    }

    /// Step the odometer to the next candidate, growing the length on rollover
    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.alphabet.len() {
                return;
            }
            *digit = 0;
        }
        if self.digits.len() >= self.max_length {
            self.done = true;
        } else {
            self.digits = vec![0; self.digits.len() + 1];
        }
    }
}

impl Iterator for Labels<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let label = self
                .alphabet
                .permits(&self.digits)
                .then(|| self.alphabet.render(&self.digits));
            self.advance();
            if label.is_some() {
                return label;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Charset;
    use std::collections::HashSet;

    fn generator(
        charset: Charset,
        min: usize,
        max: usize,
        hyphen_mode: HyphenMode,
    ) -> BruteForceGenerator {
        BruteForceGenerator::new(GenerationConfig {
            charset,
            min_length: min,
            max_length: max,
            hyphen_mode,
            tld: "lt".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_estimate_numbers_with_hyphens() {
        // 10 singles plus 10*10 pairs; no interior position exists below length 3
        let gen = generator(Charset::Numbers, 1, 2, HyphenMode::With);
        assert_eq!(gen.estimate_count(), 110);
    }

    #[test]
    fn test_estimate_letters_only_hyphen() {
        let gen = generator(Charset::Letters, 3, 3, HyphenMode::Only);
        assert_eq!(gen.estimate_count(), 26 * 26);
    }

    #[test]
    fn test_estimate_only_mode_short_lengths() {
        let gen = generator(Charset::Numbers, 1, 2, HyphenMode::Only);
        assert_eq!(gen.estimate_count(), 0);
        assert_eq!(gen.labels().count(), 0);
    }

    #[test]
    fn test_estimate_matches_enumeration() {
        let cases = [
            (Charset::Numbers, 1, 3, HyphenMode::Without),
            (Charset::Numbers, 1, 3, HyphenMode::With),
            (Charset::Numbers, 1, 4, HyphenMode::Only),
            (Charset::Letters, 1, 3, HyphenMode::With),
            (Charset::Alphanumeric, 1, 2, HyphenMode::With),
        ];
        for (charset, min, max, mode) in cases {
            let gen = generator(charset, min, max, mode);
            assert_eq!(
                gen.estimate_count(),
                gen.labels().count() as u128,
                "estimate mismatch for {charset}/{min}-{max}/{mode}"
            );
        }
    }

    #[test]
    fn test_first_labels_numbers() {
        let gen = generator(Charset::Numbers, 1, 2, HyphenMode::With);
        let labels: Vec<String> = gen.labels().collect();
        assert_eq!(labels[0], "0");
        assert_eq!(labels[9], "9");
        assert_eq!(labels[10], "00");
        assert_eq!(labels[11], "01");
        assert_eq!(labels.len(), 110);
    }

    #[test]
    fn test_only_mode_middle_hyphen() {
        let gen = generator(Charset::Letters, 3, 3, HyphenMode::Only);
        let labels: Vec<String> = gen.labels().collect();
        assert_eq!(labels.len(), 676);
        assert_eq!(labels[0], "a-a");
        assert_eq!(labels.last().unwrap(), "z-z");
        for label in &labels {
            assert_eq!(label.len(), 3);
            assert_eq!(&label[1..2], "-");
        }
    }

    #[test]
    fn test_only_mode_skips_short_lengths() {
        let gen = generator(Charset::Letters, 1, 3, HyphenMode::Only);
        let labels: Vec<String> = gen.labels().collect();
        assert_eq!(labels.len(), 676);
        assert!(labels.iter().all(|l| l.len() == 3));
    }

    #[test]
    fn test_without_mode_has_no_hyphen() {
        let gen = generator(Charset::Alphanumeric, 1, 2, HyphenMode::Without);
        assert!(gen.labels().all(|l| !l.contains('-')));
    }

    #[test]
    fn test_with_mode_no_edge_hyphen() {
        let gen = generator(Charset::Numbers, 1, 3, HyphenMode::With);
        for label in gen.labels() {
            assert!(!label.starts_with('-'), "edge hyphen in {label}");
            assert!(!label.ends_with('-'), "edge hyphen in {label}");
        }
    }

    #[test]
    fn test_with_mode_allows_consecutive_hyphens() {
        let gen = generator(Charset::Numbers, 4, 4, HyphenMode::With);
        let labels: HashSet<String> = gen.labels().collect();
        assert!(labels.contains("0--0"));
    }

    #[test]
    fn test_modes_partition() {
        // Hyphen-free and hyphen-required outputs split the tolerant output
        let with: HashSet<String> = generator(Charset::Numbers, 3, 3, HyphenMode::With)
            .labels()
            .collect();
        let without: HashSet<String> = generator(Charset::Numbers, 3, 3, HyphenMode::Without)
            .labels()
            .collect();
        let only: HashSet<String> = generator(Charset::Numbers, 3, 3, HyphenMode::Only)
            .labels()
            .collect();

        assert!(without.is_disjoint(&only));
        assert_eq!(with.len(), without.len() + only.len());
        assert!(without.is_subset(&with));
        assert!(only.is_subset(&with));
    }

    #[test]
    fn test_no_duplicates() {
        let gen = generator(Charset::Alphanumeric, 1, 2, HyphenMode::With);
        let labels: Vec<String> = gen.labels().collect();
        let unique: HashSet<&String> = labels.iter().collect();
        assert_eq!(labels.len(), unique.len());
    }

    #[test]
    fn test_enumeration_is_restartable() {
        let gen = generator(Charset::Letters, 1, 2, HyphenMode::With);
        let first: Vec<String> = gen.labels().collect();
        let second: Vec<String> = gen.labels().collect();
        assert_eq!(first, second);

        let rebuilt = generator(Charset::Letters, 1, 2, HyphenMode::With);
        let third: Vec<String> = rebuilt.labels().collect();
        assert_eq!(first, third);
    }

    #[test]
    fn test_lengths_increase() {
        let gen = generator(Charset::Numbers, 1, 3, HyphenMode::Without);
        let lengths: Vec<usize> = gen.labels().map(|l| l.len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*lengths.first().unwrap(), 1);
        assert_eq!(*lengths.last().unwrap(), 3);
    }

    #[test]
    fn test_write_to_appends_tld() {
        let gen = generator(Charset::Numbers, 1, 1, HyphenMode::Without);
        let mut out = Vec::new();
        let count = gen.write_to(&mut out).unwrap();
        assert_eq!(count, 10);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "0.lt");
        assert_eq!(lines[9], "9.lt");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_estimate_saturates_instead_of_overflowing() {
        let gen = generator(Charset::Alphanumeric, 1, 63, HyphenMode::With);
        assert_eq!(gen.estimate_count(), u128::MAX);
    }
}
