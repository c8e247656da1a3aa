pub mod decompose;
pub mod generate;
pub mod selftest;

use std::fs;
use std::path::Path;

use chol_core::errors::{CholError, ErrorInfo};

pub(crate) fn io_error(code: &str, path: &Path, err: std::io::Error) -> CholError {
    CholError::Io(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

pub(crate) fn write_text(path: &Path, contents: &str) -> Result<(), CholError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| io_error("create-dir", parent, err))?;
    }
    fs::write(path, contents).map_err(|err| io_error("write", path, err))
}
