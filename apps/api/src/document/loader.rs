//! Docx loader — pulls the raw `word/document.xml` markup out of a .docx container.
//!
//! The markup is returned as-is; tags and attributes are left for the normalizer
//! to flatten along with the body text.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::errors::AppError;

/// Entry inside a .docx container that holds the document body.
pub const DOCUMENT_ENTRY: &str = "word/document.xml";

/// Upper bound on the buffer preallocated from the declared entry size.
const MAX_PREALLOC: u64 = 1 << 20;

/// Reads the first `word/document.xml` entry of the container at `path`.
///
/// Fails with `AppError::Io` when the file cannot be opened, is not a zip
/// container, or the entry cannot be read; `AppError::NotFound` when the
/// container has no such entry.
pub fn extract_docx_text(path: &Path) -> Result<String, AppError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file).map_err(container_error)?;

    // Scan in archive order so a duplicated entry resolves to its first copy.
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(container_error)?;
        if entry.name() != DOCUMENT_ENTRY {
            continue;
        }

        // The declared size comes from the central directory and may be bogus.
        let mut buf = Vec::with_capacity(entry.size().min(MAX_PREALLOC) as usize);
        entry.read_to_end(&mut buf)?;
        debug!(
            "Read {} bytes of {DOCUMENT_ENTRY} from {}",
            buf.len(),
            path.display()
        );
        return Ok(String::from_utf8_lossy(&buf).into_owned());
    }

    Err(AppError::NotFound(format!(
        "{DOCUMENT_ENTRY} in {}",
        path.display()
    )))
}

/// Every container-level failure is reported as an I/O error.
fn container_error(err: ZipError) -> AppError {
    match err {
        ZipError::Io(e) => AppError::Io(e),
        other => AppError::Io(io::Error::new(io::ErrorKind::InvalidData, other)),
    }
}
