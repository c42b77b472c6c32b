//! ATS report — the plain-text artifact written at startup and served over HTTP.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::errors::AppError;

/// Outcome of one scoring run, rendered as a three-line text report.
#[derive(Debug, Clone, PartialEq)]
pub struct AtsReport {
    pub job_description_path: PathBuf,
    pub resume_path: PathBuf,
    pub score: f64,
}

impl AtsReport {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AtsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Job Description: {}\nResume: {}\nATS Score: {:.2}%",
            self.job_description_path.display(),
            self.resume_path.display(),
            self.score
        )
    }
}

/// Writes `content` to `path`, replacing whatever was there.
pub fn write_report(path: &Path, content: &str) -> Result<(), AppError> {
    std::fs::write(path, content)?;
    Ok(())
}

/// Reads a previously written report back as text.
pub async fn read_report(path: &Path) -> Result<String, AppError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
