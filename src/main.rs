//! Domain Sweep - exhaustive domain name label generation
//!
//! Thin CLI over the generation engine: parses flags into a
//! `GenerationConfig`, reports the estimated count, and streams the
//! enumeration to a file.

use clap::{Args, Parser, Subcommand};
use domain_sweep::{BruteForceGenerator, Charset, DomainSweepError, GenerationConfig, HyphenMode};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "domain-sweep", version, about = "Generate domain name lists by exhaustive enumeration")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Brute force domain generation
    Brute(BruteArgs),
}

#[derive(Args)]
struct BruteArgs {
    /// Character set to use
    #[arg(short, long, default_value = "alphanumeric", value_parser = Charset::from_str)]
    charset: Charset,

    /// Minimum domain length
    #[arg(short = 'm', long, default_value_t = 2)]
    min: usize,

    /// Maximum domain length
    #[arg(short = 'M', long, default_value_t = 4)]
    max: usize,

    /// Domain length (sets both min and max to this value)
    #[arg(short, long, conflicts_with_all = ["min", "max"])]
    length: Option<usize>,

    /// Hyphen handling mode
    #[arg(long, default_value = "with", value_parser = HyphenMode::from_str)]
    hyphen_mode: HyphenMode,

    /// Top-level domain
    #[arg(long, default_value = "lt")]
    tld: String,

    /// Output file path (default: auto-generated)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only estimate count, do not generate
    #[arg(short, long)]
    estimate_only: bool,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Brute(args) => run_brute(args),
    };

    if let Err(e) = result {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_brute(args: BruteArgs) -> domain_sweep::Result<()> {
    let (min, max) = match args.length {
        Some(length) => (length, length),
        None => (args.min, args.max),
    };

    let config = GenerationConfig {
        charset: args.charset,
        min_length: min,
        max_length: max,
        hyphen_mode: args.hyphen_mode,
        tld: args.tld,
    };
    let generator = BruteForceGenerator::new(config)?;

    let estimated = generator.estimate_count();
    println!("Estimated domains to generate: {}", format_count(estimated));

    if args.estimate_only {
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| default_output_path(generator.config()));

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DomainSweepError::from(e).with_path(parent.display().to_string()))?;
        }
    }

    println!("Generating domains to: {}", output.display());
    let count = generator.generate_to_file(&output)?;
    println!("Successfully generated {} domains", format_count(count as u128));

    Ok(())
}

fn default_output_path(config: &GenerationConfig) -> PathBuf {
    PathBuf::from(format!(
        "assets/output/brute_{}_{}-{}_{}_{}.txt",
        config.charset, config.min_length, config.max_length, config.hyphen_mode, config.tld
    ))
}

/// Format a count with thousands separators
fn format_count(n: u128) -> String {
    let digits = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = digits.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(110), "110");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(46656), "46,656");
        assert_eq!(format_count(1_000_000), "1,000,000");
    }

    #[test]
    fn test_default_output_path() {
        let path = default_output_path(&GenerationConfig::default());
        assert_eq!(
            path,
            PathBuf::from("assets/output/brute_alphanumeric_2-4_with_lt.txt")
        );
    }
}
