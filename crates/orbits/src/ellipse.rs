use serde::Serialize;

/// Tangential half-ellipse coasting from `r_depart_km` to `r_arrive_km`, both apsides.
///
/// Either radius may be the larger one; `eccentricity` is reported as a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransferEllipse {
    pub r_depart_km: f64,
    pub r_arrive_km: f64,
    pub semi_major_axis_km: f64,
    pub eccentricity: f64,
    pub angular_momentum_km2_s: f64,
    pub v_depart_km_s: f64,
    pub v_arrive_km_s: f64,
    pub specific_energy_km2_s2: f64,
    pub transfer_time_s: f64,
}

impl TransferEllipse {
    /// Resolve the ellipse from its angular momentum; inputs are assumed validated.
    pub fn between(mu_km3_s2: f64, r_depart_km: f64, r_arrive_km: f64) -> Self {
        let h = crate::transfer_angular_momentum(mu_km3_s2, r_depart_km, r_arrive_km);
        let a = crate::semi_major_axis(r_depart_km, r_arrive_km);
        Self {
            r_depart_km,
            r_arrive_km,
            semi_major_axis_km: a,
            eccentricity: crate::eccentricity(r_depart_km, r_arrive_km),
            angular_momentum_km2_s: h,
            v_depart_km_s: crate::speed_from_momentum(h, r_depart_km),
            v_arrive_km_s: crate::speed_from_momentum(h, r_arrive_km),
            specific_energy_km2_s2: crate::specific_energy(mu_km3_s2, a),
            transfer_time_s: crate::transfer_time(mu_km3_s2, a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hohmann_core::constants::MU_EARTH_KM3_S2 as MU;

    #[test]
    fn reversed_endpoints_swap_speeds_and_keep_shape() {
        let up = TransferEllipse::between(MU, 7_000.0, 21_000.0);
        let down = TransferEllipse::between(MU, 21_000.0, 7_000.0);
        assert_relative_eq!(up.v_depart_km_s, down.v_arrive_km_s, max_relative = 1e-12);
        assert_relative_eq!(up.v_arrive_km_s, down.v_depart_km_s, max_relative = 1e-12);
        assert_eq!(up.eccentricity, down.eccentricity);
        assert_relative_eq!(up.eccentricity, 0.5);
        assert_eq!(up.transfer_time_s, down.transfer_time_s);
    }

    #[test]
    fn degenerate_ellipse_is_the_circular_orbit() {
        let ellipse = TransferEllipse::between(MU, 7_000.0, 7_000.0);
        assert_eq!(ellipse.eccentricity, 0.0);
        assert_relative_eq!(
            ellipse.v_depart_km_s,
            crate::circular_velocity(MU, 7_000.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            2.0 * ellipse.transfer_time_s,
            crate::orbital_period(MU, 7_000.0),
            max_relative = 1e-12
        );
    }
}
