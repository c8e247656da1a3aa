#![deny(missing_docs)]
#![doc = "Core matrix, error, and provenance types shared by the chol32 crates."]

pub mod errors;
pub mod provenance;
pub mod rng;
mod matrix;

pub use errors::{CholError, ErrorInfo};
pub use matrix::{Matrix32, N};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::RngHandle;
