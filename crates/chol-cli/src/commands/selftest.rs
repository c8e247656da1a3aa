use std::error::Error;
use std::path::PathBuf;

use chol_kernel::{run_suite, ScenarioResult};
use clap::Args;

use crate::config::load_verify_opts;

#[derive(Args, Debug)]
pub struct SelftestArgs {
    /// Optional YAML file overriding the verification tolerances.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Emit the scenario results as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &SelftestArgs) -> Result<(), Box<dyn Error>> {
    let opts = load_verify_opts(args.config.as_deref())?;
    let results = run_suite(&opts);
    let total = results.len();
    let failures = results.iter().filter(|result| !result.passed).count();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_text(&results);
    }

    if failures > 0 {
        return Err(format!("{failures} of {total} scenarios failed").into());
    }
    Ok(())
}

fn print_text(results: &[ScenarioResult]) {
    println!("Running Cholesky decomposition tests...");
    println!();
    for (idx, result) in results.iter().enumerate() {
        if result.passed {
            println!("Test {} PASSED: {}", idx + 1, result.name);
        } else {
            println!("Test {} FAILED: {} ({})", idx + 1, result.name, result.detail);
        }
        log::debug!("{}: {}", result.name, result.detail);
    }
    println!();
    let failures = results.iter().filter(|result| !result.passed).count();
    if failures == 0 {
        println!("All tests PASSED ({}/{})", results.len(), results.len());
    } else {
        println!(
            "Tests FAILED: {} out of {} tests failed",
            failures,
            results.len()
        );
    }
}
