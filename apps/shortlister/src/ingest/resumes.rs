//! Resume Loader: turns a directory of PDF resumes into `(filename, text)` pairs.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use indicatif::ProgressBar;
use tracing::{debug, error, info, warn};

use crate::errors::AppError;

/// A candidate resume, identified by its filename inside the resume directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resume {
    pub filename: String,
    /// Trimmed text of every page. Empty when extraction failed.
    pub text: String,
}

/// Loads every `*.pdf` in `dir`, sorted by filename.
///
/// A file that cannot be parsed is logged and kept with empty text so one bad
/// upload never drops the rest of the batch. An unreadable directory yields an
/// empty list.
pub fn load_resumes(dir: &Path, progress: &ProgressBar) -> Vec<Resume> {
    let mut filenames = match list_pdf_files(dir) {
        Ok(names) => names,
        Err(e) => {
            error!("{e}");
            return Vec::new();
        }
    };
    filenames.sort();

    progress.set_length(filenames.len() as u64);

    let mut resumes = Vec::with_capacity(filenames.len());
    for filename in filenames {
        progress.set_message(filename.clone());
        let text = match extract_text_from_pdf(&dir.join(&filename)) {
            Ok(text) => {
                debug!("Extracted {} chars from {filename}", text.chars().count());
                text
            }
            Err(e) => {
                error!("{e}");
                String::new()
            }
        };
        resumes.push(Resume { filename, text });
        progress.inc(1);
    }
    progress.finish_and_clear();

    info!("Loaded {} resume(s) from {}", resumes.len(), dir.display());
    resumes
}

/// Names of regular files in `dir` ending in `.pdf`.
fn list_pdf_files(dir: &Path) -> Result<Vec<String>, AppError> {
    let entries = std::fs::read_dir(dir).map_err(|e| AppError::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AppError::io(dir, e))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            warn!("Skipping non UTF-8 filename {:?}", entry.file_name());
            continue;
        };
        if !name.ends_with(".pdf") {
            continue;
        }
        match entry.file_type() {
            Ok(ft) if ft.is_file() => names.push(name.to_string()),
            Ok(_) => debug!("Skipping {name}: not a regular file"),
            Err(e) => warn!("Skipping {name}: {e}"),
        }
    }
    Ok(names)
}

/// Extracts and trims the text of every page in the PDF at `path`.
///
/// The parser panics on some malformed inputs; a panic is reported as an
/// extraction error like any other.
pub fn extract_text_from_pdf(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path).map_err(|e| AppError::io(path, e))?;

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(&bytes)
    }));

    match outcome {
        Ok(Ok(text)) => Ok(text.trim().to_string()),
        Ok(Err(e)) => Err(AppError::Extraction {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
        Err(_) => Err(AppError::Extraction {
            path: path.to_path_buf(),
            message: "PDF parser panicked".to_string(),
        }),
    }
}
