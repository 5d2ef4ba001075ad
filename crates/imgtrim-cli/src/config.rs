//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use imgtrim_core::{FetchOptions, ImageSource, Pipeline, TrimPolicy, DEFAULT_JPEG_QUALITY};

pub const DEFAULT_INPUT: &str = "./apple.jpg";
pub const TRIMMED_FILE: &str = "trimmed_apple.jpg";
pub const FILTERED_FILE: &str = "filtered_apple.jpg";

/// Trim, rotate and negate an image, writing two JPEGs.
#[derive(Debug, Parser)]
#[command(name = "imgtrim", version)]
pub struct Args {
    /// Image file or http(s) URL
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: String,

    /// Directory for output files
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// JPEG quality, 1-100
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,

    /// Download timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Print the top-left pixels of the input
    #[arg(long)]
    pub inspect: bool,
}

/// One output file and the transforms that produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputJob {
    pub pipeline: Pipeline,
    pub path: PathBuf,
}

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: ImageSource,
    pub out_dir: PathBuf,
    pub quality: u8,
    pub inspect: bool,
    pub fetch: FetchOptions,
    /// Margin for the plain trimmed output
    pub trim_margin: usize,
    /// Margin for the trimmed, rotated and negated output
    pub filter_margin: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: ImageSource::parse(DEFAULT_INPUT),
            out_dir: PathBuf::from("."),
            quality: DEFAULT_JPEG_QUALITY,
            inspect: false,
            fetch: FetchOptions::default(),
            trim_margin: 60,
            filter_margin: 50,
        }
    }
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        Self {
            input: ImageSource::parse(&args.input),
            out_dir: args.out_dir,
            quality: args.quality,
            inspect: args.inspect,
            fetch: FetchOptions {
                timeout: Duration::from_secs(args.timeout),
                ..FetchOptions::default()
            },
            ..Self::default()
        }
    }
}

impl RunConfig {
    /// The two outputs produced from every input.
    pub fn jobs(&self) -> Vec<OutputJob> {
        vec![
            OutputJob {
                pipeline: Pipeline::new()
                    .trim(self.trim_margin)
                    .with_trim_policy(TrimPolicy::Keep),
                path: self.out_dir.join(TRIMMED_FILE),
            },
            OutputJob {
                pipeline: Pipeline::new()
                    .trim(self.filter_margin)
                    .rotate180()
                    .negate()
                    .with_trim_policy(TrimPolicy::Keep),
                path: self.out_dir.join(FILTERED_FILE),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<RunConfig, clap::Error> {
        Args::try_parse_from(std::iter::once("imgtrim").chain(args.iter().copied()))
            .map(RunConfig::from)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.input, ImageSource::File(PathBuf::from("./apple.jpg")));
        assert_eq!(config.quality, 75);
        assert_eq!(config.fetch.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_all_options() {
        let config = parse(&[
            "https://example.com/cat.png",
            "--out-dir",
            "out",
            "--quality",
            "90",
            "--timeout",
            "5",
            "--inspect",
        ])
        .unwrap();

        assert!(config.input.is_remote());
        assert_eq!(config.out_dir, PathBuf::from("out"));
        assert_eq!(config.quality, 90);
        assert_eq!(config.fetch.timeout, Duration::from_secs(5));
        assert!(config.inspect);
    }

    #[test]
    fn test_help_is_not_a_usage_error() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_rejects_bad_quality() {
        for value in ["0", "101", "high"] {
            let err = parse(&["--quality", value]).unwrap_err();
            assert_eq!(err.exit_code(), 2, "--quality {value} should be a usage error");
        }
    }

    #[test]
    fn test_rejects_missing_value() {
        let err = parse(&["--out-dir"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_rejects_unknown_and_extra() {
        assert_eq!(parse(&["--verbose"]).unwrap_err().kind(), ErrorKind::UnknownArgument);
        assert!(parse(&["a.jpg", "b.jpg"]).is_err());
    }

    #[test]
    fn test_jobs() {
        let config = RunConfig {
            out_dir: PathBuf::from("out"),
            ..Default::default()
        };
        let jobs = config.jobs();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].path, PathBuf::from("out").join("trimmed_apple.jpg"));
        assert_eq!(jobs[0].pipeline.to_string(), "trim(60)");
        assert_eq!(jobs[1].path, PathBuf::from("out").join("filtered_apple.jpg"));
        assert_eq!(
            jobs[1].pipeline.to_string(),
            "trim(50) -> rotate180 -> negate"
        );
    }
}
