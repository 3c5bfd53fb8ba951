//! Two-body orbit helpers shared by every transfer calculator.
//!
//! All formulas are closed-form consequences of energy and angular-momentum conservation.
//! Radii are in km, speeds in km/s, times in s and `mu_km3_s2` is the central body's GM.

pub mod ellipse;
pub mod error;
pub mod orbit;

pub use ellipse::TransferEllipse;
pub use error::{InvalidInputError, require_mu, require_radius};
pub use orbit::{Apsis, Orbit};

use std::f64::consts::PI;

/// Speed on a circular orbit of radius `r_km`.
#[inline]
pub fn circular_velocity(mu_km3_s2: f64, r_km: f64) -> f64 {
    (mu_km3_s2 / r_km).sqrt()
}

/// Vis-viva speed at radius `r_km` on an orbit with semi-major axis `a_km`.
#[inline]
pub fn vis_viva_speed(mu_km3_s2: f64, r_km: f64, a_km: f64) -> f64 {
    (mu_km3_s2 * (2.0 / r_km - 1.0 / a_km)).sqrt()
}

/// Specific angular momentum of the ellipse whose apsides are `r_a_km` and `r_b_km`.
#[inline]
pub fn transfer_angular_momentum(mu_km3_s2: f64, r_a_km: f64, r_b_km: f64) -> f64 {
    (2.0 * mu_km3_s2).sqrt() * (r_a_km * r_b_km / (r_a_km + r_b_km)).sqrt()
}

/// Speed at an apse, where the velocity is perpendicular to the radius.
#[inline]
pub fn speed_from_momentum(h_km2_s: f64, r_km: f64) -> f64 {
    h_km2_s / r_km
}

#[inline]
pub fn semi_major_axis(r_a_km: f64, r_b_km: f64) -> f64 {
    0.5 * (r_a_km + r_b_km)
}

/// Eccentricity of the ellipse with apsides `r_a_km` and `r_b_km`, always non-negative.
#[inline]
pub fn eccentricity(r_a_km: f64, r_b_km: f64) -> f64 {
    (r_b_km - r_a_km).abs() / (r_b_km + r_a_km)
}

/// Eccentricity with the sign of the radius change: negative when `end_km < start_km`.
#[inline]
pub fn signed_eccentricity(start_km: f64, end_km: f64) -> f64 {
    (end_km - start_km) / (end_km + start_km)
}

/// Specific orbital energy (km²/s²).
#[inline]
pub fn specific_energy(mu_km3_s2: f64, a_km: f64) -> f64 {
    -mu_km3_s2 / (2.0 * a_km)
}

/// Full Keplerian period.
#[inline]
pub fn orbital_period(mu_km3_s2: f64, a_km: f64) -> f64 {
    2.0 * PI * (a_km.powi(3) / mu_km3_s2).sqrt()
}

/// Half-period coast from one apse to the other.
#[inline]
pub fn transfer_time(mu_km3_s2: f64, a_km: f64) -> f64 {
    PI * (a_km.powi(3) / mu_km3_s2).sqrt()
}
