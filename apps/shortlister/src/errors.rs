use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type.
///
/// Stage failures (extraction, requirements, LLM, missing files) are recovered
/// where they happen; the variants here are what those stages log, plus the
/// output-directory guard which is allowed to end a run early.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF extraction failed for {path}: {message}")]
    Extraction { path: PathBuf, message: String },

    #[error("Failed to load requirements: {0}")]
    Requirements(String),

    #[error(
        "Refusing to reset {0}: it contains files this tool did not create (use --force-reset to override)"
    )]
    UnownedOutputDir(PathBuf),

    #[error("Output directory {output} overlaps the resume directory {resumes}")]
    UnsafeOutputDir { output: PathBuf, resumes: PathBuf },
}

impl AppError {
    /// Wraps an `std::io::Error` with the path it was raised for.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}
