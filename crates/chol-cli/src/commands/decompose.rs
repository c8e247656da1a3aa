use std::error::Error;
use std::fs;
use std::path::PathBuf;

use chol_core::errors::CholError;
use chol_kernel::analyze;
use chol_kernel::serde_io::report_to_json;
use clap::Args;

use super::{io_error, write_text};
use crate::config::load_verify_opts;
use crate::matrix_io::{matrix_from_json, matrix_to_json};

#[derive(Args, Debug)]
pub struct DecomposeArgs {
    /// JSON file holding the 32x32 input matrix as an array of rows.
    #[arg(long)]
    pub input: PathBuf,
    /// Output directory for `factor.json` and `report.json`.
    #[arg(long)]
    pub out: PathBuf,
    /// Optional YAML file overriding the verification tolerances.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &DecomposeArgs) -> Result<(), Box<dyn Error>> {
    let opts = load_verify_opts(args.config.as_deref())?;
    let json =
        fs::read_to_string(&args.input).map_err(|err| io_error("read", &args.input, err))?;
    let matrix = matrix_from_json(&json)?;
    log::info!("decomposing {}", args.input.display());

    let source = args.input.display().to_string();
    let analysis = analyze(&matrix, &source, &opts)?;
    let report = &analysis.report;

    write_text(&args.out.join("report.json"), &report_to_json(report)?)?;
    if let Some(factor) = &analysis.factor {
        write_text(&args.out.join("factor.json"), &matrix_to_json(factor)?)?;
    }
    println!("outcome: {} (code {})", report.outcome, report.code);

    if let Some(err) = analysis.error {
        return Err(CholError::from(err).into());
    }
    if let Some(check) = report.check.as_ref().filter(|check| !check.passed()) {
        return Err(format!(
            "factor checks failed: residual {} (tolerance {})",
            magnitude(check.residual),
            magnitude(check.tolerance)
        )
        .into());
    }
    Ok(())
}

fn magnitude(value: Option<f64>) -> String {
    value.map_or_else(|| "non-finite".to_string(), |value| format!("{value:.3e}"))
}
