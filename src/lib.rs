//! Closed-form orbital transfer calculator.
//!
//! The calculators and their collaborators live in the workspace crates; this crate
//! re-exports them so front-ends (the CLI, tests, other tools) share a single path.

pub use hohmann_config as config;
pub use hohmann_core::{constants, time, units};
pub use hohmann_export as export;
pub use hohmann_impulsive as impulsive;
pub use hohmann_orbits as orbits;
pub use hohmann_transfer as transfer;

/// Returns the version of the library for smoke tests and `--version` banners.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
