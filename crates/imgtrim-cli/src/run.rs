//! One decode -> transform -> encode run.

use std::path::PathBuf;

use imgtrim_core::inspect::DEFAULT_SAMPLE_SIZE;
use imgtrim_core::{corner_sample, decode, write_jpeg, DecodeError, EncodeError, TransformError};
use thiserror::Error;
use tracing::{error, info};

use crate::config::RunConfig;

/// Why one output was not produced.
#[derive(Debug, Error)]
pub enum JobError {
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// A failed output.
#[derive(Debug)]
pub struct JobFailure {
    pub path: PathBuf,
    pub error: JobError,
}

/// Result of a run.
#[derive(Debug)]
pub enum RunOutcome {
    /// The input could not be loaded; no transform ran.
    DecodeFailed(DecodeError),
    /// Every job was attempted.
    Completed {
        written: Vec<PathBuf>,
        failures: Vec<JobFailure>,
    },
}

impl RunOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunOutcome::DecodeFailed(_) => 1,
            RunOutcome::Completed { failures, .. } if !failures.is_empty() => 3,
            RunOutcome::Completed { .. } => 0,
        }
    }
}

/// Decode the input once, then run every job on it independently.
///
/// A failing job does not stop the others.
pub fn run(config: &RunConfig) -> RunOutcome {
    let image = match decode(&config.input, &config.fetch) {
        Ok(image) => image,
        Err(err) => {
            error!(source = %config.input, "{err}");
            return RunOutcome::DecodeFailed(err);
        }
    };
    info!(
        source = %config.input,
        width = image.width(),
        height = image.height(),
        "loaded image"
    );

    if config.inspect {
        match corner_sample(&image, DEFAULT_SAMPLE_SIZE) {
            Some(sample) => print!("{sample}"),
            None => println!("Image too small to view a 3x3 sample."),
        }
    }

    let mut written = Vec::new();
    let mut failures = Vec::new();

    for job in config.jobs() {
        let result = job
            .pipeline
            .apply(&image)
            .map_err(JobError::from)
            .and_then(|out| write_jpeg(&out, &job.path, config.quality).map_err(JobError::from));

        match result {
            Ok(()) => {
                info!(path = %job.path.display(), pipeline = %job.pipeline, "saved output");
                written.push(job.path);
            }
            Err(error) => {
                error!(path = %job.path.display(), "{error}");
                failures.push(JobFailure {
                    path: job.path,
                    error,
                });
            }
        }
    }

    RunOutcome::Completed { written, failures }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgtrim_core::{FetchOptions, ImageSource, PackedColor, PixelBuffer};
    use std::path::Path;

    fn decode_output(dir: &Path, name: &str) -> PixelBuffer {
        decode(&ImageSource::from(dir.join(name).as_path()), &FetchOptions::default()).unwrap()
    }

    fn config_in(dir: &Path, input: &str) -> RunConfig {
        RunConfig {
            input: ImageSource::parse(input),
            out_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_input_runs_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.jpg");
        let config = config_in(dir.path(), missing.to_str().unwrap());

        let outcome = run(&config);

        assert!(matches!(
            outcome,
            RunOutcome::DecodeFailed(DecodeError::Io { .. })
        ));
        assert_eq!(outcome.exit_code(), 1);
        for job in config.jobs() {
            assert!(!job.path.exists(), "{} should not exist", job.path.display());
        }
    }

    #[test]
    fn test_writes_both_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.jpg");
        let source = PixelBuffer::filled(200, 150, PackedColor::rgb(30, 60, 90));
        write_jpeg(&source, &input, 95).unwrap();

        let config = config_in(dir.path(), input.to_str().unwrap());
        let outcome = run(&config);
        assert_eq!(outcome.exit_code(), 0);

        let trimmed = decode_output(dir.path(), "trimmed_apple.jpg");
        assert_eq!(trimmed.dimensions(), (30, 80));

        let filtered = decode_output(dir.path(), "filtered_apple.jpg");
        assert_eq!(filtered.dimensions(), (50, 100));
        let px = filtered.get(25, 50).unwrap().unpack();
        assert!(px.r > 200, "red should be inverted, got {}", px.r);
    }

    #[test]
    fn test_small_input_keeps_untrimmed() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("small.jpg");
        write_jpeg(&PixelBuffer::filled(16, 16, PackedColor::WHITE), &input, 90).unwrap();

        let config = config_in(dir.path(), input.to_str().unwrap());
        let outcome = run(&config);
        assert_eq!(outcome.exit_code(), 0);

        let trimmed = decode_output(dir.path(), "trimmed_apple.jpg");
        assert_eq!(trimmed.dimensions(), (16, 16));
    }

    #[test]
    fn test_unwritable_output_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.jpg");
        write_jpeg(&PixelBuffer::filled(200, 200, PackedColor::BLACK), &input, 90).unwrap();

        let mut config = config_in(dir.path(), input.to_str().unwrap());
        config.out_dir = dir.path().join("missing-dir");

        let outcome = run(&config);
        assert_eq!(outcome.exit_code(), 3);
        match outcome {
            RunOutcome::Completed { written, failures } => {
                assert!(written.is_empty());
                assert_eq!(failures.len(), 2);
                assert!(matches!(failures[0].error, JobError::Encode(EncodeError::Io { .. })));
            }
            other => panic!("Expected Completed, got {:?}", other),
        }
    }
}
