//! Write the rendered document next to the input file.
//!
//! The output path is always the input path with `.html` appended
//! (`data.csv` -> `data.csv.html`).

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::AppError;

/// Where a document ended up and how large it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub path: PathBuf,
    pub bytes: u64,
    /// True when the write was skipped (`--simulate`).
    pub simulated: bool,
}

/// `<input>.html`, keeping the full input file name.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".html");
    PathBuf::from(name)
}

/// Write `document` to `<input>.html` and report the size on disk.
///
/// With `simulate` nothing touches the filesystem and the reported size is
/// the length of the rendered document.
pub fn write_document(input: &Path, document: &str, simulate: bool) -> Result<WriteReport, AppError> {
    let path = output_path(input);

    if simulate {
        info!("simulate: would write {} bytes to {}", document.len(), path.display());
        return Ok(WriteReport {
            path,
            bytes: document.len() as u64,
            simulated: true,
        });
    }

    fs::write(&path, document)
        .map_err(|e| AppError::io(format!("Failed to write output '{}': {e}", path.display())))?;
    let bytes = fs::metadata(&path)
        .map_err(|e| AppError::io(format!("Failed to stat output '{}': {e}", path.display())))?
        .len();

    info!("wrote {} ({bytes} bytes)", path.display());
    Ok(WriteReport {
        path,
        bytes,
        simulated: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn output_path_appends_suffix() {
        assert_eq!(output_path(Path::new("data/steps.csv")), PathBuf::from("data/steps.csv.html"));
        assert_eq!(output_path(Path::new("noext")), PathBuf::from("noext.html"));
    }

    #[test]
    fn reported_size_matches_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.csv");
        let doc = "<html>\u{e9}</html>";

        let report = write_document(&input, doc, false).unwrap();
        assert_eq!(report.path, dir.path().join("in.csv.html"));
        assert_eq!(report.bytes, fs::metadata(&report.path).unwrap().len());
        assert_eq!(report.bytes, doc.len() as u64);
        assert!(!report.simulated);
    }

    #[test]
    fn simulate_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.csv");

        let report = write_document(&input, "abc", true).unwrap();
        assert!(report.simulated);
        assert_eq!(report.bytes, 3);
        assert!(!report.path.exists());
    }

    #[test]
    fn unwritable_output_is_fatal() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("missing-dir").join("in.csv");

        let err = write_document(&input, "abc", false).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_IO);
    }
}
