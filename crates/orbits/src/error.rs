use thiserror::Error;

/// Raised before any computation when a calculator's geometric preconditions fail.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("{name} must be a positive radius (got {value} km)")]
    NonPositiveRadius { name: &'static str, value: f64 },
    #[error("gravitational parameter must be positive (got {0} km^3/s^2)")]
    NonPositiveMu(f64),
    #[error(
        "intermediate radius {r_intermediate} km must exceed both endpoint radii (largest is {max_endpoint} km)"
    )]
    IntermediateTooLow {
        r_intermediate: f64,
        max_endpoint: f64,
    },
    #[error("periapsis {periapsis} km lies above apoapsis {apoapsis} km")]
    InvertedApsides { periapsis: f64, apoapsis: f64 },
}

/// Reject zero, negative and non-finite radii.
pub fn require_radius(name: &'static str, value: f64) -> Result<f64, InvalidInputError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InvalidInputError::NonPositiveRadius { name, value })
    }
}

/// Reject zero, negative and non-finite gravitational parameters.
pub fn require_mu(mu_km3_s2: f64) -> Result<f64, InvalidInputError> {
    if mu_km3_s2.is_finite() && mu_km3_s2 > 0.0 {
        Ok(mu_km3_s2)
    } else {
        Err(InvalidInputError::NonPositiveMu(mu_km3_s2))
    }
}
