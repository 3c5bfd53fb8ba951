use approx::assert_abs_diff_eq;
use hohmann_calculator::constants::MU_EARTH_KM3_S2;
use hohmann_calculator::impulsive::{
    DeparturePoint, InvalidInputError, bi_elliptic, h_point_departure, hohmann, point_departure,
};

const MU_SUN: f64 = 1.327_124_400_18e11; // km^3 / s^2
const AU_KM: f64 = 149_597_870.7; // km
const MU_ROUNDED: f64 = 398_600.0;

#[test]
fn low_earth_orbit_raise_matches_worked_example() {
    let h = hohmann(6_678.0, 9_378.0, MU_ROUNDED).unwrap();
    assert_abs_diff_eq!(h.total_delta_v, 1.1977, epsilon = 1e-3);
    assert_abs_diff_eq!(h.transfer_time, 3_579.25, epsilon = 0.5);
    assert_abs_diff_eq!(h.sma, 8_028.0, epsilon = 1e-9);
}

#[test]
fn small_circular_raise_matches_worked_example() {
    let h = hohmann(6_878.0, 7_378.0, MU_ROUNDED).unwrap();
    assert_abs_diff_eq!(h.total_delta_v, 0.2624, epsilon = 1e-3);
    assert_abs_diff_eq!(h.transfer_time, 2_994.56, epsilon = 0.5);
}

#[test]
fn hohmann_symmetry_and_time_match() {
    let r1 = 1.0 * AU_KM;
    let r2 = 1.524 * AU_KM;
    let h12 = hohmann(r1, r2, MU_SUN).unwrap();
    let h21 = hohmann(r2, r1, MU_SUN).unwrap();

    // Total dv symmetric under exchange of r1 and r2
    assert!((h12.total_delta_v - h21.total_delta_v).abs() < 1e-9);
    assert!((h12.transfer_time - h21.transfer_time).abs() < 1e-6);
    assert!(h12.delta_v1 > 0.0 && h21.delta_v1 > 0.0);
}

#[test]
fn hohmann_earth_mars_reasonable_numbers() {
    let h = hohmann(1.0 * AU_KM, 1.523679 * AU_KM, MU_SUN).unwrap();
    assert!((h.total_delta_v - 5.59).abs() < 0.05, "dv_total = {}", h.total_delta_v);
    let days = h.transfer_time / 86_400.0;
    assert!((days - 258.9).abs() < 1.0, "tof_days = {}", days);
}

#[test]
fn hohmann_earth_venus_reasonable_numbers() {
    let h = hohmann(1.0 * AU_KM, 0.723 * AU_KM, MU_SUN).unwrap();
    assert!((h.total_delta_v - 5.21).abs() < 0.01, "dv_total = {}", h.total_delta_v);
    let days = h.transfer_time / 86_400.0;
    assert!((days - 146.0).abs() < 1.0, "tof_days = {}", days);
}

#[test]
fn bielliptic_outperforms_hohmann_for_large_ratios() {
    let ho = hohmann(7_000.0, 105_000.0, MU_EARTH_KM3_S2).unwrap();
    let bi = bi_elliptic(7_000.0, 105_000.0, 210_000.0, MU_EARTH_KM3_S2).unwrap();
    assert!(bi.total_delta_v < ho.total_delta_v);
    assert!(bi.total_time > ho.transfer_time);
}

#[test]
fn bielliptic_loses_for_small_ratios() {
    let ho = hohmann(7_000.0, 21_000.0, MU_EARTH_KM3_S2).unwrap();
    let bi = bi_elliptic(7_000.0, 21_000.0, 42_000.0, MU_EARTH_KM3_S2).unwrap();
    assert!(bi.total_delta_v > ho.total_delta_v);
}

#[test]
fn bielliptic_rejects_intermediate_below_target() {
    let err = bi_elliptic(7_000.0, 105_000.0, 100_000.0, MU_EARTH_KM3_S2).unwrap_err();
    assert!(matches!(err, InvalidInputError::IntermediateTooLow { .. }));
}

#[test]
fn perigee_departure_to_circular_orbit() {
    let p = point_departure(
        6_858.0,
        7_178.0,
        22_378.0,
        22_378.0,
        DeparturePoint::Perigee,
        MU_ROUNDED,
    )
    .unwrap();
    assert_abs_diff_eq!(p.total_dv, 3.0522, epsilon = 1e-3);
    assert_abs_diff_eq!(p.transfer_time, 8_794.5, epsilon = 0.5);
    assert_eq!(p.start_r, 6_858.0);
    assert_eq!(p.end_r, 22_378.0);
}

#[test]
fn circular_orbits_reduce_every_formulation_to_hohmann() {
    let (r1, r2) = (7_000.0, 42_164.0);
    let reference = hohmann(r1, r2, MU_EARTH_KM3_S2).unwrap();
    for departure in [DeparturePoint::Perigee, DeparturePoint::Apogee] {
        let p = point_departure(r1, r1, r2, r2, departure, MU_EARTH_KM3_S2).unwrap();
        let h = h_point_departure(r1, r1, r2, r2, departure, MU_EARTH_KM3_S2).unwrap();
        assert_abs_diff_eq!(p.total_dv, reference.total_delta_v, epsilon = 1e-9);
        assert_abs_diff_eq!(h.total_dv, reference.total_delta_v, epsilon = 1e-9);
        assert_abs_diff_eq!(h.transfer_time, reference.transfer_time, epsilon = 1e-6);
    }
}

#[test]
fn non_positive_inputs_are_rejected_everywhere() {
    assert!(hohmann(0.0, 9_378.0, MU_ROUNDED).is_err());
    assert!(hohmann(6_678.0, 9_378.0, -1.0).is_err());
    assert!(bi_elliptic(7_000.0, f64::NAN, 210_000.0, MU_ROUNDED).is_err());
    assert!(point_departure(7_000.0, 8_000.0, -5.0, 9_000.0, DeparturePoint::Apogee, MU_ROUNDED).is_err());
    assert!(h_point_departure(7_000.0, 8_000.0, 9_000.0, 0.0, DeparturePoint::Perigee, MU_ROUNDED).is_err());
}
