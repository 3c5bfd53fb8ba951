use serde::Serialize;

use crate::error::{InvalidInputError, require_radius};

/// Which apse of an orbit a burn happens at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Apsis {
    Periapsis,
    Apoapsis,
}

/// Closed, coplanar Keplerian orbit described by its apsis radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Orbit {
    periapsis_km: f64,
    apoapsis_km: f64,
}

impl Orbit {
    /// Build an orbit from periapsis and apoapsis radii; `periapsis_km` may not exceed
    /// `apoapsis_km`.
    pub fn new(periapsis_km: f64, apoapsis_km: f64) -> Result<Self, InvalidInputError> {
        let periapsis_km = require_radius("periapsis", periapsis_km)?;
        let apoapsis_km = require_radius("apoapsis", apoapsis_km)?;
        if periapsis_km > apoapsis_km {
            return Err(InvalidInputError::InvertedApsides {
                periapsis: periapsis_km,
                apoapsis: apoapsis_km,
            });
        }
        Ok(Self {
            periapsis_km,
            apoapsis_km,
        })
    }

    pub fn circular(radius_km: f64) -> Result<Self, InvalidInputError> {
        Self::new(radius_km, radius_km)
    }

    pub fn periapsis_km(&self) -> f64 {
        self.periapsis_km
    }

    pub fn apoapsis_km(&self) -> f64 {
        self.apoapsis_km
    }

    pub fn radius_at(&self, apsis: Apsis) -> f64 {
        match apsis {
            Apsis::Periapsis => self.periapsis_km,
            Apsis::Apoapsis => self.apoapsis_km,
        }
    }

    pub fn is_circular(&self) -> bool {
        self.periapsis_km == self.apoapsis_km
    }

    pub fn semi_major_axis_km(&self) -> f64 {
        crate::semi_major_axis(self.periapsis_km, self.apoapsis_km)
    }

    pub fn eccentricity(&self) -> f64 {
        crate::eccentricity(self.periapsis_km, self.apoapsis_km)
    }

    pub fn specific_energy(&self, mu_km3_s2: f64) -> f64 {
        crate::specific_energy(mu_km3_s2, self.semi_major_axis_km())
    }

    pub fn angular_momentum(&self, mu_km3_s2: f64) -> f64 {
        crate::transfer_angular_momentum(mu_km3_s2, self.periapsis_km, self.apoapsis_km)
    }

    /// Vis-viva speed at `r_km`. Only meaningful for radii between the apsides.
    pub fn speed_at(&self, mu_km3_s2: f64, r_km: f64) -> f64 {
        crate::vis_viva_speed(mu_km3_s2, r_km, self.semi_major_axis_km())
    }

    pub fn period(&self, mu_km3_s2: f64) -> f64 {
        crate::orbital_period(mu_km3_s2, self.semi_major_axis_km())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hohmann_core::constants::MU_EARTH_KM3_S2 as MU;

    #[test]
    fn derived_attributes_follow_apsides() {
        let orbit = Orbit::new(7_000.0, 10_000.0).unwrap();
        assert_relative_eq!(orbit.semi_major_axis_km(), 8_500.0);
        assert_relative_eq!(orbit.eccentricity(), 3_000.0 / 17_000.0);
        assert_relative_eq!(orbit.specific_energy(MU), -MU / 17_000.0);
        assert!(orbit.eccentricity() >= 0.0 && orbit.eccentricity() < 1.0);
        assert!(!orbit.is_circular());
    }

    #[test]
    fn momentum_is_radius_times_speed_at_each_apse() {
        let orbit = Orbit::new(6_858.0, 7_178.0).unwrap();
        let h = orbit.angular_momentum(MU);
        for apsis in [Apsis::Periapsis, Apsis::Apoapsis] {
            let r = orbit.radius_at(apsis);
            assert_relative_eq!(r * orbit.speed_at(MU, r), h, max_relative = 1e-12);
        }
    }

    #[test]
    fn circular_orbit_speed_matches_circular_velocity() {
        let orbit = Orbit::circular(7_000.0).unwrap();
        assert!(orbit.is_circular());
        assert_eq!(orbit.eccentricity(), 0.0);
        assert_relative_eq!(
            orbit.speed_at(MU, 7_000.0),
            crate::circular_velocity(MU, 7_000.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn inverted_or_non_positive_apsides_are_rejected() {
        assert_eq!(
            Orbit::new(10_000.0, 7_000.0),
            Err(InvalidInputError::InvertedApsides {
                periapsis: 10_000.0,
                apoapsis: 7_000.0
            })
        );
        assert!(Orbit::new(0.0, 7_000.0).is_err());
        assert!(Orbit::circular(-1.0).is_err());
    }
}
