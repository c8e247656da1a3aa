use std::error::Error;
use std::path::PathBuf;

use chol_kernel::fixtures;
use chol_kernel::params::FixtureSpec;
use clap::{Args, ValueEnum};

use super::write_text;
use crate::matrix_io::matrix_to_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FixtureKind {
    Identity,
    Banded,
    NegativeDiagonal,
    Asymmetric,
    RandomSpd,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Kind of matrix to generate.
    #[arg(long, value_enum)]
    pub kind: FixtureKind,
    /// Diagonal value for `banded` matrices.
    #[arg(long, default_value_t = 2.0)]
    pub diagonal: f64,
    /// Off-diagonal decay numerator for `banded` matrices.
    #[arg(long, default_value_t = 0.1)]
    pub decay: f64,
    /// Seed for `random-spd` matrices.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Destination JSON file.
    #[arg(long)]
    pub out: PathBuf,
}

impl GenerateArgs {
    fn spec(&self) -> FixtureSpec {
        match self.kind {
            FixtureKind::Identity => FixtureSpec::Identity,
            FixtureKind::Banded => FixtureSpec::Banded {
                diagonal: self.diagonal,
                decay: self.decay,
            },
            FixtureKind::NegativeDiagonal => FixtureSpec::NegativeDiagonal,
            FixtureKind::Asymmetric => FixtureSpec::Asymmetric,
            FixtureKind::RandomSpd => FixtureSpec::RandomSpd { seed: self.seed },
        }
    }
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let spec = args.spec();
    let matrix = fixtures::build(&spec);
    write_text(&args.out, &matrix_to_json(&matrix)?)?;
    log::info!("wrote {} to {}", spec.label(), args.out.display());
    Ok(())
}
