use std::fs;
use std::path::Path;

use chol_core::errors::{CholError, ErrorInfo};
use chol_kernel::VerifyOpts;

/// Loads verification tolerances from YAML, or the defaults when no path is given.
pub fn load_verify_opts(path: Option<&Path>) -> Result<VerifyOpts, CholError> {
    let Some(path) = path else {
        return Ok(VerifyOpts::default());
    };
    let contents = fs::read_to_string(path).map_err(|err| {
        CholError::Io(
            ErrorInfo::new("config-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    let opts: VerifyOpts = serde_yaml::from_str(&contents).map_err(|err| {
        CholError::Config(
            ErrorInfo::new("config-parse", err.to_string())
                .with_context("path", path.display().to_string())
                .with_hint(
                    "expected keys: absolute_tolerance, relative_tolerance, triangular_tolerance",
                ),
        )
    })?;
    log::debug!("loaded verify options from {}: {:?}", path.display(), opts);
    Ok(opts.sanitised())
}
