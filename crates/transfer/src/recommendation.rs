//! Choose between departing from apogee or perigee for an elliptical-to-elliptical transfer.

use hohmann_impulsive::{DeparturePoint, HPointResult, InvalidInputError, h_point_departure};
use serde::Serialize;

/// Both candidate transfers and the cheaper of the two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepartureRecommendation {
    pub from_apogee: HPointResult,
    pub from_perigee: HPointResult,
    /// Apogee total Δv minus perigee total Δv (km/s).
    pub difference_km_s: f64,
    pub recommended: DeparturePoint,
}

impl DepartureRecommendation {
    pub fn recommended_result(&self) -> &HPointResult {
        match self.recommended {
            DeparturePoint::Apogee => &self.from_apogee,
            DeparturePoint::Perigee => &self.from_perigee,
        }
    }

    /// Δv saved by taking the recommended departure point.
    pub fn savings_km_s(&self) -> f64 {
        self.difference_km_s.abs()
    }
}

/// Evaluate both departure points for the orbits (a, ap) -> (b, bp).
///
/// Apogee is recommended only when strictly cheaper; equal totals fall back to perigee.
pub fn recommend_departure(
    a: f64,
    ap: f64,
    b: f64,
    bp: f64,
    mu_km3_s2: f64,
) -> Result<DepartureRecommendation, InvalidInputError> {
    let from_apogee = h_point_departure(a, ap, b, bp, DeparturePoint::Apogee, mu_km3_s2)?;
    let from_perigee = h_point_departure(a, ap, b, bp, DeparturePoint::Perigee, mu_km3_s2)?;
    let recommended = if from_apogee.total_dv < from_perigee.total_dv {
        DeparturePoint::Apogee
    } else {
        DeparturePoint::Perigee
    };
    log::info!(
        "departure from {} saves {:.4} km/s",
        recommended.label(),
        (from_apogee.total_dv - from_perigee.total_dv).abs()
    );
    Ok(DepartureRecommendation {
        from_apogee,
        from_perigee,
        difference_km_s: from_apogee.total_dv - from_perigee.total_dv,
        recommended,
    })
}
