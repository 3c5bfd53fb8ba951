//! Transfers between coplanar, coaxial elliptical orbits that depart and arrive at an apse.
//!
//! Two formulations of the same two-burn transfer live here:
//! - [`point_departure`] uses vis-viva on each orbit and reports the primary quantities.
//! - [`h_point_departure`] derives every speed from the angular momenta of the two orbits and
//!   both candidate transfer ellipses, reporting all of them for cross-checking.

use hohmann_core::constants::MU_EARTH_KM3_S2;
use hohmann_orbits::{
    Apsis, InvalidInputError, Orbit, TransferEllipse, eccentricity, require_mu, semi_major_axis,
    signed_eccentricity, speed_from_momentum, transfer_angular_momentum, transfer_time,
};
use serde::Serialize;

use crate::plan::{TransferLeg, TransferPlan};

/// Apse of the initial orbit the transfer departs from; it arrives at the same apse of the
/// final orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeparturePoint {
    Apogee,
    Perigee,
}

impl DeparturePoint {
    pub fn from_apogee(from_apogee: bool) -> Self {
        if from_apogee {
            Self::Apogee
        } else {
            Self::Perigee
        }
    }

    pub fn apsis(self) -> Apsis {
        match self {
            Self::Apogee => Apsis::Apoapsis,
            Self::Perigee => Apsis::Periapsis,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Apogee => "apogee",
            Self::Perigee => "perigee",
        }
    }
}

/// Result of [`point_departure`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointResult {
    pub departure: DeparturePoint,
    pub dv1: f64,
    pub dv2: f64,
    pub total_dv: f64,
    pub transfer_time: f64,
    /// Initial-orbit speed at `start_r`.
    pub v1: f64,
    /// Final-orbit speed at `end_r`.
    pub v2: f64,
    pub vt1: f64,
    pub vt2: f64,
    pub at: f64,
    /// Signed: negative when the transfer descends (`end_r < start_r`).
    pub et: f64,
    pub start_r: f64,
    pub end_r: f64,
}

impl PointResult {
    pub fn plan(&self) -> TransferPlan {
        apse_plan(
            self.start_r,
            self.end_r,
            (self.v1, self.vt1),
            (self.vt2, self.v2),
            self.transfer_time,
        )
    }
}

/// Transfer from the chosen apse of orbit (rp1, ra1) to the same apse of orbit (rp2, ra2).
pub fn point_departure(
    rp1: f64,
    ra1: f64,
    rp2: f64,
    ra2: f64,
    departure: DeparturePoint,
    mu_km3_s2: f64,
) -> Result<PointResult, InvalidInputError> {
    let initial = Orbit::new(rp1, ra1)?;
    let target = Orbit::new(rp2, ra2)?;
    let mu = require_mu(mu_km3_s2)?;
    log::debug!(
        "point_departure: initial=({rp1}, {ra1}) km, final=({rp2}, {ra2}) km, from {}",
        departure.label()
    );

    let start_r = initial.radius_at(departure.apsis());
    let end_r = target.radius_at(departure.apsis());

    let v1 = initial.speed_at(mu, start_r);
    let v2 = target.speed_at(mu, end_r);
    let transfer = TransferEllipse::between(mu, start_r, end_r);

    let dv1 = (transfer.v_depart_km_s - v1).abs();
    let dv2 = (v2 - transfer.v_arrive_km_s).abs();

    Ok(PointResult {
        departure,
        dv1,
        dv2,
        total_dv: dv1 + dv2,
        transfer_time: transfer.transfer_time_s,
        v1,
        v2,
        vt1: transfer.v_depart_km_s,
        vt2: transfer.v_arrive_km_s,
        at: transfer.semi_major_axis_km,
        et: signed_eccentricity(start_r, end_r),
        start_r,
        end_r,
    })
}

/// [`point_departure`] around the Earth.
pub fn point_departure_earth(
    rp1: f64,
    ra1: f64,
    rp2: f64,
    ra2: f64,
    departure: DeparturePoint,
) -> Result<PointResult, InvalidInputError> {
    point_departure(rp1, ra1, rp2, ra2, departure, MU_EARTH_KM3_S2)
}

/// Result of [`h_point_departure`].
///
/// Velocity names read `v<radius><orbit>`: `v_ap3p` is the speed at A' on the transfer
/// ellipse 3'. Orbits 1 and 2 are the initial and final orbits, 3 joins the perigees (A, B)
/// and 3' joins the apogees (A', B').
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HPointResult {
    pub departure: DeparturePoint,
    pub dv1: f64,
    pub dv2: f64,
    pub total_dv: f64,
    pub transfer_time: f64,
    pub at: f64,
    pub et: f64,
    pub start_r: f64,
    pub end_r: f64,
    pub h1: f64,
    pub h2: f64,
    pub h3: f64,
    pub h3p: f64,
    pub v_a1: f64,
    pub v_a3: f64,
    pub v_b2: f64,
    pub v_b3: f64,
    pub v_ap1: f64,
    pub v_ap3p: f64,
    pub v_bp2: f64,
    pub v_bp3p: f64,
}

impl HPointResult {
    pub fn plan(&self) -> TransferPlan {
        let (burn1, burn2) = match self.departure {
            DeparturePoint::Apogee => ((self.v_ap1, self.v_ap3p), (self.v_bp3p, self.v_bp2)),
            DeparturePoint::Perigee => ((self.v_a1, self.v_a3), (self.v_b3, self.v_b2)),
        };
        apse_plan(self.start_r, self.end_r, burn1, burn2, self.transfer_time)
    }
}

/// Apse-to-apse transfer solved through the angular momenta of all four orbits involved.
///
/// `a`/`ap` are the initial orbit's perigee and apogee, `b`/`bp` the final orbit's. All eight
/// apse speeds are reported; only the four at the chosen departure and arrival apses feed the
/// burns.
pub fn h_point_departure(
    a: f64,
    ap: f64,
    b: f64,
    bp: f64,
    departure: DeparturePoint,
    mu_km3_s2: f64,
) -> Result<HPointResult, InvalidInputError> {
    Orbit::new(a, ap)?;
    Orbit::new(b, bp)?;
    let mu = require_mu(mu_km3_s2)?;
    log::debug!(
        "h_point_departure: A={a} A'={ap} B={b} B'={bp} km, from {}",
        departure.label()
    );

    let h1 = transfer_angular_momentum(mu, a, ap);
    let h2 = transfer_angular_momentum(mu, b, bp);
    let h3 = transfer_angular_momentum(mu, a, b);
    let h3p = transfer_angular_momentum(mu, ap, bp);

    let v_a1 = speed_from_momentum(h1, a);
    let v_a3 = speed_from_momentum(h3, a);
    let v_b2 = speed_from_momentum(h2, b);
    let v_b3 = speed_from_momentum(h3, b);
    let v_ap1 = speed_from_momentum(h1, ap);
    let v_ap3p = speed_from_momentum(h3p, ap);
    let v_bp2 = speed_from_momentum(h2, bp);
    let v_bp3p = speed_from_momentum(h3p, bp);

    let (start_r, end_r, dv1, dv2) = match departure {
        DeparturePoint::Apogee => (ap, bp, (v_ap3p - v_ap1).abs(), (v_bp2 - v_bp3p).abs()),
        DeparturePoint::Perigee => (a, b, (v_a3 - v_a1).abs(), (v_b2 - v_b3).abs()),
    };
    let at = semi_major_axis(start_r, end_r);

    Ok(HPointResult {
        departure,
        dv1,
        dv2,
        total_dv: dv1 + dv2,
        transfer_time: transfer_time(mu, at),
        at,
        et: eccentricity(start_r, end_r),
        start_r,
        end_r,
        h1,
        h2,
        h3,
        h3p,
        v_a1,
        v_a3,
        v_b2,
        v_b3,
        v_ap1,
        v_ap3p,
        v_bp2,
        v_bp3p,
    })
}

/// [`h_point_departure`] around the Earth.
pub fn h_point_departure_earth(
    a: f64,
    ap: f64,
    b: f64,
    bp: f64,
    departure: DeparturePoint,
) -> Result<HPointResult, InvalidInputError> {
    h_point_departure(a, ap, b, bp, departure, MU_EARTH_KM3_S2)
}

fn apse_plan(
    start_r: f64,
    end_r: f64,
    (before1, after1): (f64, f64),
    (before2, after2): (f64, f64),
    coast_time_s: f64,
) -> TransferPlan {
    TransferPlan::new(vec![
        TransferLeg {
            departure_radius_km: start_r,
            arrival_radius_km: end_r,
            velocity_before_km_s: before1,
            velocity_after_km_s: after1,
            coast_time_s,
        },
        TransferLeg {
            departure_radius_km: end_r,
            arrival_radius_km: end_r,
            velocity_before_km_s: before2,
            velocity_after_km_s: after2,
            coast_time_s: 0.0,
        },
    ])
}
