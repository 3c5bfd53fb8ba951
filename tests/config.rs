use hohmann_calculator::config::{ConfigError, find_body, load_bodies, load_problems, resolve_mu};
use hohmann_calculator::constants::MU_EARTH_KM3_S2;
use hohmann_calculator::transfer::evaluate_problems;

#[test]
fn shipped_body_catalog_loads() {
    let bodies = load_bodies("configs/bodies").expect("body catalog");
    assert_eq!(bodies.len(), 6);
    let earth = find_body(&bodies, "earth").expect("earth");
    assert_eq!(earth.mu_km3_s2, MU_EARTH_KM3_S2);
    assert!(find_body(&bodies, "MARS").is_ok());
    assert!(matches!(find_body(&bodies, "Pluto"), Err(ConfigError::UnknownBody(_))));
}

#[test]
fn explicit_mu_wins_over_named_body() {
    let bodies = load_bodies("configs/bodies").expect("body catalog");
    let moon = resolve_mu(&bodies, Some("Moon"), None).unwrap();
    assert!(moon < 5_000.0);
    assert_eq!(resolve_mu(&bodies, Some("Moon"), Some(1.0)).unwrap(), 1.0);
    assert_eq!(resolve_mu(&bodies, None, None).unwrap(), MU_EARTH_KM3_S2);
}

#[test]
fn shipped_reference_problems_all_evaluate() {
    let bodies = load_bodies("configs/bodies").expect("body catalog");
    let problems = load_problems("configs/problems.yaml").expect("problems");
    assert_eq!(problems.len(), 5);

    let outcomes = evaluate_problems(&problems, &bodies).expect("evaluation");
    let kinds: Vec<_> = outcomes.iter().map(|o| o.kind).collect();
    assert_eq!(kinds, ["hohmann", "hohmann", "point", "bi_elliptic", "h_point"]);
    assert!((outcomes[0].total_delta_v_km_s - 1.1977).abs() < 1e-3);
    assert_eq!(outcomes[3].burns_km_s.len(), 3);
    assert_eq!(outcomes[4].mu_km3_s2, MU_EARTH_KM3_S2);
}
