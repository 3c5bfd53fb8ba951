//! Impulsive transfer calculators: Hohmann, bi-elliptic and apse-to-apse transfers.
//!
//! Every calculator is a pure function of its radii and the central body's GM. Inputs are
//! validated up front and rejected with [`InvalidInputError`]; no partial result is produced.

pub mod apse;
pub mod plan;
pub mod transfers;

pub use apse::{
    DeparturePoint, HPointResult, PointResult, h_point_departure, h_point_departure_earth,
    point_departure, point_departure_earth,
};
pub use hohmann_orbits::InvalidInputError;
pub use plan::{TransferLeg, TransferPlan};
pub use transfers::{BiEllipticResult, HohmannResult, bi_elliptic, hohmann};
