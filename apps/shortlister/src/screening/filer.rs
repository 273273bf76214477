//! Filer: resets the shortlist directory and copies matched resumes into it.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::{error, info, warn};

use crate::errors::AppError;

/// A resume copied into the shortlist directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortlistedFile {
    /// 1-based position among the files actually copied.
    pub rank: usize,
    pub source: String,
    pub destination: PathBuf,
}

#[derive(Debug, Default)]
pub struct FilingReport {
    pub copied: Vec<ShortlistedFile>,
    /// Names from the reply that did not resolve to a resume on disk.
    pub missing: Vec<String>,
}

/// `<NN>_<name with spaces as underscores>`
pub fn destination_name(rank: usize, filename: &str) -> String {
    format!("{rank:02}_{}", filename.replace(' ', "_"))
}

/// Marker file written into every shortlist directory this tool creates.
pub const OWNER_MARKER: &str = ".shortlister";

/// Names this tool writes into the shortlist directory.
fn artifact_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{2,}_.+\.pdf$").expect("static regex"))
}

/// Leaves `output` existing, empty of prior shortlist files, and marked as ours.
///
/// Without `force`, files are only removed from a directory carrying
/// `OWNER_MARKER`, and only when every other entry looks like a previous
/// shortlist artifact. An unmarked directory is adopted only when empty.
/// `output` may never be (or contain) the resume directory.
pub fn prepare_output_dir(output: &Path, resume_dir: &Path, force: bool) -> Result<(), AppError> {
    if let (Some(out), Some(resumes)) = (resolve(output), resolve(resume_dir)) {
        if resumes.starts_with(&out) {
            return Err(AppError::UnsafeOutputDir {
                output: output.to_path_buf(),
                resumes: resume_dir.to_path_buf(),
            });
        }
    }

    if !output.exists() {
        std::fs::create_dir_all(output).map_err(|e| AppError::io(output, e))?;
        info!("Created shortlist directory {}", output.display());
        return write_marker(output);
    }

    let mut marked = false;
    let mut artifacts = Vec::new();
    let mut foreign = false;
    for entry in std::fs::read_dir(output).map_err(|e| AppError::io(output, e))? {
        let entry = entry.map_err(|e| AppError::io(output, e))?;
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        let name = entry.file_name();
        match name.to_str() {
            Some(OWNER_MARKER) if is_file => marked = true,
            Some(n) if is_file && artifact_re().is_match(n) => artifacts.push(entry.path()),
            _ => foreign = true,
        }
    }

    if force {
        if foreign || !marked {
            warn!("Force-resetting {}", output.display());
        }
        std::fs::remove_dir_all(output).map_err(|e| AppError::io(output, e))?;
        std::fs::create_dir_all(output).map_err(|e| AppError::io(output, e))?;
        return write_marker(output);
    }

    if foreign || (!marked && !artifacts.is_empty()) {
        return Err(AppError::UnownedOutputDir(output.to_path_buf()));
    }

    for path in &artifacts {
        std::fs::remove_file(path).map_err(|e| AppError::io(path, e))?;
    }
    info!(
        "Cleared {} previous shortlist file(s) from {}",
        artifacts.len(),
        output.display()
    );
    if marked {
        Ok(())
    } else {
        write_marker(output)
    }
}

fn write_marker(output: &Path) -> Result<(), AppError> {
    let marker = output.join(OWNER_MARKER);
    std::fs::write(&marker, "Created by shortlister. Contents are replaced on every run.\n")
        .map_err(|e| AppError::io(&marker, e))
}

/// Copies each named resume from `resume_dir` into `output`, in order.
/// Ranks count successful copies only, starting at 1.
pub fn file_shortlist(filenames: &[String], resume_dir: &Path, output: &Path) -> FilingReport {
    let mut report = FilingReport::default();

    for filename in filenames {
        if !is_plain_filename(filename) {
            warn!("Ignoring filename with path components: {filename}");
            report.missing.push(filename.clone());
            continue;
        }

        let source = resume_dir.join(filename);
        if !source.is_file() {
            warn!("File not found: {filename}");
            report.missing.push(filename.clone());
            continue;
        }

        let rank = report.copied.len() + 1;
        let dst_name = destination_name(rank, filename);
        let destination = output.join(&dst_name);

        match std::fs::copy(&source, &destination) {
            Ok(_) => {
                println!("✔ {filename} → saved as {dst_name}");
                report.copied.push(ShortlistedFile {
                    rank,
                    source: filename.clone(),
                    destination,
                });
            }
            Err(e) => error!("{}", AppError::io(&destination, e)),
        }
    }

    report
}

/// True when `name` is a bare file name with no directory part.
fn is_plain_filename(name: &str) -> bool {
    let path = Path::new(name);
    path.file_name().is_some_and(|f| f == path.as_os_str())
}

/// Canonical form of `path`, or of its parent joined with the final component
/// when `path` itself does not exist yet.
fn resolve(path: &Path) -> Option<PathBuf> {
    if let Ok(p) = path.canonicalize() {
        return Some(p);
    }
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    Some(parent.canonicalize().ok()?.join(path.file_name()?))
}
