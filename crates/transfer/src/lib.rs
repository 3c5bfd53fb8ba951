//! Transfer façade crate: comparison and recommendation collaborators over the calculators.

pub mod comparison;
pub mod problems;
pub mod recommendation;

pub use facade::*;
pub use hohmann_impulsive as impulsive;

mod facade;
