//! imgtrim - trim, rotate and negate an image
//!
//! Decodes one image, then writes two JPEGs next to each other:
//! - `trimmed_apple.jpg`: borders trimmed by 60 pixels
//! - `filtered_apple.jpg`: trimmed by 50, rotated 180 degrees and negated
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=imgtrim_core=debug`) for diagnostics.

mod config;
mod run;

use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Args, RunConfig};
use crate::run::{run, RunOutcome};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let config = match Args::try_parse() {
        Ok(args) => RunConfig::from(args),
        Err(err) => {
            // Help and version go to stdout with status 0; usage errors exit 2
            let _ = err.print();
            return ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(2));
        }
    };

    let outcome = run(&config);
    match &outcome {
        RunOutcome::DecodeFailed(err) => {
            println!("Image loading failed: {err}");
            println!("Exiting...");
        }
        RunOutcome::Completed { written, failures } => {
            info!(written = written.len(), failed = failures.len(), "run finished");
            for failure in failures {
                println!(
                    "Failed to save image {}: {}",
                    failure.path.display(),
                    failure.error
                );
            }
            println!("Image processing completed.");
        }
    }

    ExitCode::from(outcome.exit_code())
}
