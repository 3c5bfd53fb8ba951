//! Analytic calculators for impulsive transfers between coplanar circular orbits.
//!
//! Provides Hohmann and bi-elliptic transfer calculators that return every intermediate
//! quantity (speeds, energies, momenta) alongside delta-v and time of flight.

use hohmann_orbits::{
    InvalidInputError, TransferEllipse, circular_velocity, orbital_period, require_mu,
    require_radius, specific_energy,
};
use serde::Serialize;

use crate::plan::{TransferLeg, TransferPlan};

/// Result for a Hohmann transfer between circular, coplanar orbits of radii r1 and r2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HohmannResult {
    pub r1: f64,
    pub r2: f64,
    pub v1: f64,
    pub v2: f64,
    pub sma: f64,
    pub ecc: f64,
    pub v_transfer_p: f64, // transfer speed at r1
    pub v_transfer_a: f64, // transfer speed at r2
    pub delta_v1: f64,
    pub delta_v2: f64,
    pub total_delta_v: f64,
    pub transfer_time: f64,
    pub initial_period: f64,
    pub final_period: f64,
    pub initial_energy: f64,
    pub final_energy: f64,
    pub transfer_energy: f64,
    pub angular_momentum: f64,
}

impl HohmannResult {
    pub fn plan(&self) -> TransferPlan {
        TransferPlan::new(vec![
            TransferLeg {
                departure_radius_km: self.r1,
                arrival_radius_km: self.r2,
                velocity_before_km_s: self.v1,
                velocity_after_km_s: self.v_transfer_p,
                coast_time_s: self.transfer_time,
            },
            TransferLeg {
                departure_radius_km: self.r2,
                arrival_radius_km: self.r2,
                velocity_before_km_s: self.v_transfer_a,
                velocity_after_km_s: self.v2,
                coast_time_s: 0.0,
            },
        ])
    }
}

/// Compute the classical Hohmann transfer between two circular coplanar orbits.
///
/// Inputs:
/// - `r1`: initial circular orbit radius (km)
/// - `r2`: target circular orbit radius (km)
/// - `mu_km3_s2`: gravitational parameter of central body (km^3/s^2)
///
/// Descending transfers (`r2 < r1`) are valid; burn magnitudes are always non-negative.
pub fn hohmann(r1: f64, r2: f64, mu_km3_s2: f64) -> Result<HohmannResult, InvalidInputError> {
    let r1 = require_radius("r1", r1)?;
    let r2 = require_radius("r2", r2)?;
    let mu = require_mu(mu_km3_s2)?;
    log::debug!("hohmann: r1={r1} km, r2={r2} km, mu={mu}");

    let v1 = circular_velocity(mu, r1);
    let v2 = circular_velocity(mu, r2);
    let transfer = TransferEllipse::between(mu, r1, r2);

    let delta_v1 = (transfer.v_depart_km_s - v1).abs();
    let delta_v2 = (v2 - transfer.v_arrive_km_s).abs();

    Ok(HohmannResult {
        r1,
        r2,
        v1,
        v2,
        sma: transfer.semi_major_axis_km,
        ecc: transfer.eccentricity,
        v_transfer_p: transfer.v_depart_km_s,
        v_transfer_a: transfer.v_arrive_km_s,
        delta_v1,
        delta_v2,
        total_delta_v: delta_v1 + delta_v2,
        transfer_time: transfer.transfer_time_s,
        initial_period: orbital_period(mu, r1),
        final_period: orbital_period(mu, r2),
        initial_energy: specific_energy(mu, r1),
        final_energy: specific_energy(mu, r2),
        transfer_energy: transfer.specific_energy_km2_s2,
        angular_momentum: transfer.angular_momentum_km2_s,
    })
}

/// Result for a bi-elliptic transfer parameterized by the intermediate apoapsis radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BiEllipticResult {
    pub r1: f64,
    pub r2: f64,
    pub r_intermediate: f64,
    pub v1: f64,
    pub v2: f64,
    pub v_intermediate: f64, // circular speed at r_intermediate, reference only
    pub sma1: f64,
    pub sma2: f64,
    pub ecc1: f64,
    pub ecc2: f64,
    pub v_t1: f64, // first ellipse at r1
    pub v_t2: f64, // first ellipse at r_intermediate
    pub v_t3: f64, // second ellipse at r_intermediate
    pub v_t4: f64, // second ellipse at r2
    pub delta_v1: f64,
    pub delta_v2: f64,
    pub delta_v3: f64,
    pub total_delta_v: f64,
    pub transfer_time1: f64,
    pub transfer_time2: f64,
    pub total_time: f64,
    pub e1: f64,
    pub e2: f64,
    pub e_t1: f64,
    pub e_t2: f64,
    pub h1: f64,
    pub h2: f64,
    pub h_initial: f64,
    pub h_final: f64,
    pub h_intermediate: f64,
}

impl BiEllipticResult {
    pub fn plan(&self) -> TransferPlan {
        TransferPlan::new(vec![
            TransferLeg {
                departure_radius_km: self.r1,
                arrival_radius_km: self.r_intermediate,
                velocity_before_km_s: self.v1,
                velocity_after_km_s: self.v_t1,
                coast_time_s: self.transfer_time1,
            },
            TransferLeg {
                departure_radius_km: self.r_intermediate,
                arrival_radius_km: self.r2,
                velocity_before_km_s: self.v_t2,
                velocity_after_km_s: self.v_t3,
                coast_time_s: self.transfer_time2,
            },
            TransferLeg {
                departure_radius_km: self.r2,
                arrival_radius_km: self.r2,
                velocity_before_km_s: self.v_t4,
                velocity_after_km_s: self.v2,
                coast_time_s: 0.0,
            },
        ])
    }
}

/// Compute a bi-elliptic transfer using a specified intermediate apoapsis radius.
///
/// This function does not optimize `r_intermediate`; it evaluates the three impulsive burns
/// and TOF for the two transfer ellipses (r1 -> r_intermediate) and (r_intermediate -> r2).
/// Callers may sweep `r_intermediate` to study trade-offs; for large r2/r1 ratios
/// bi-elliptic can beat Hohmann beyond ~11.94.
///
/// The middle burn is the scalar speed difference between the two ellipses at
/// `r_intermediate`: both velocities are tangential and point the same way.
pub fn bi_elliptic(
    r1: f64,
    r2: f64,
    r_intermediate: f64,
    mu_km3_s2: f64,
) -> Result<BiEllipticResult, InvalidInputError> {
    let r1 = require_radius("r1", r1)?;
    let r2 = require_radius("r2", r2)?;
    let r_intermediate = require_radius("r_intermediate", r_intermediate)?;
    let mu = require_mu(mu_km3_s2)?;
    let max_endpoint = r1.max(r2);
    if r_intermediate <= max_endpoint {
        return Err(InvalidInputError::IntermediateTooLow {
            r_intermediate,
            max_endpoint,
        });
    }
    log::debug!("bi_elliptic: r1={r1} km, r2={r2} km, r_intermediate={r_intermediate} km");

    let v1 = circular_velocity(mu, r1);
    let v2 = circular_velocity(mu, r2);
    let v_intermediate = circular_velocity(mu, r_intermediate);

    // First ellipse: r1 -> r_intermediate, second: r_intermediate -> r2
    let outbound = TransferEllipse::between(mu, r1, r_intermediate);
    let inbound = TransferEllipse::between(mu, r_intermediate, r2);

    let delta_v1 = (outbound.v_depart_km_s - v1).abs();
    let delta_v2 = (inbound.v_depart_km_s - outbound.v_arrive_km_s).abs();
    let delta_v3 = (v2 - inbound.v_arrive_km_s).abs();

    Ok(BiEllipticResult {
        r1,
        r2,
        r_intermediate,
        v1,
        v2,
        v_intermediate,
        sma1: outbound.semi_major_axis_km,
        sma2: inbound.semi_major_axis_km,
        ecc1: outbound.eccentricity,
        ecc2: inbound.eccentricity,
        v_t1: outbound.v_depart_km_s,
        v_t2: outbound.v_arrive_km_s,
        v_t3: inbound.v_depart_km_s,
        v_t4: inbound.v_arrive_km_s,
        delta_v1,
        delta_v2,
        delta_v3,
        total_delta_v: delta_v1 + delta_v2 + delta_v3,
        transfer_time1: outbound.transfer_time_s,
        transfer_time2: inbound.transfer_time_s,
        total_time: outbound.transfer_time_s + inbound.transfer_time_s,
        e1: specific_energy(mu, r1),
        e2: specific_energy(mu, r2),
        e_t1: outbound.specific_energy_km2_s2,
        e_t2: inbound.specific_energy_km2_s2,
        h1: outbound.angular_momentum_km2_s,
        h2: inbound.angular_momentum_km2_s,
        h_initial: r1 * v1,
        h_final: r2 * v2,
        h_intermediate: r_intermediate * v_intermediate,
    })
}
