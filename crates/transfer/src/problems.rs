//! Evaluate catalogs of named reference problems.

use hohmann_config::{BodyConfig, ConfigError, ProblemConfig, TransferConfig, resolve_mu};
use hohmann_impulsive::{
    DeparturePoint, InvalidInputError, TransferPlan, bi_elliptic, h_point_departure, hohmann,
    point_departure,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("problem '{name}': {source}")]
    Config {
        name: String,
        #[source]
        source: ConfigError,
    },
    #[error("problem '{name}': {source}")]
    InvalidInput {
        name: String,
        #[source]
        source: InvalidInputError,
    },
}

/// Uniform summary of one evaluated problem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemOutcome {
    pub name: String,
    pub kind: &'static str,
    pub mu_km3_s2: f64,
    pub burns_km_s: Vec<f64>,
    pub total_delta_v_km_s: f64,
    pub transfer_time_s: f64,
}

/// Evaluate a single problem, resolving μ against `bodies`.
pub fn evaluate_problem(
    problem: &ProblemConfig,
    bodies: &[BodyConfig],
) -> Result<ProblemOutcome, ProblemError> {
    let mu = resolve_mu(bodies, problem.body.as_deref(), problem.mu_km3_s2).map_err(|source| {
        ProblemError::Config {
            name: problem.name.clone(),
            source,
        }
    })?;
    let with_name = |source: InvalidInputError| ProblemError::InvalidInput {
        name: problem.name.clone(),
        source,
    };

    let (kind, plan) = match problem.transfer {
        TransferConfig::Hohmann { r1_km, r2_km } => (
            "hohmann",
            hohmann(r1_km, r2_km, mu).map_err(with_name)?.plan(),
        ),
        TransferConfig::BiElliptic {
            r1_km,
            r2_km,
            r_intermediate_km,
        } => (
            "bi_elliptic",
            bi_elliptic(r1_km, r2_km, r_intermediate_km, mu)
                .map_err(with_name)?
                .plan(),
        ),
        TransferConfig::Point {
            rp1_km,
            ra1_km,
            rp2_km,
            ra2_km,
            from_apogee,
        } => (
            "point",
            point_departure(
                rp1_km,
                ra1_km,
                rp2_km,
                ra2_km,
                DeparturePoint::from_apogee(from_apogee),
                mu,
            )
            .map_err(with_name)?
            .plan(),
        ),
        TransferConfig::HPoint {
            a_km,
            ap_km,
            b_km,
            bp_km,
            from_apogee,
        } => (
            "h_point",
            h_point_departure(
                a_km,
                ap_km,
                b_km,
                bp_km,
                DeparturePoint::from_apogee(from_apogee),
                mu,
            )
            .map_err(with_name)?
            .plan(),
        ),
    };

    Ok(outcome(problem.name.clone(), kind, mu, &plan))
}

/// Evaluate every problem in order, stopping at the first failure.
pub fn evaluate_problems(
    problems: &[ProblemConfig],
    bodies: &[BodyConfig],
) -> Result<Vec<ProblemOutcome>, ProblemError> {
    problems
        .iter()
        .map(|problem| evaluate_problem(problem, bodies))
        .collect()
}

fn outcome(name: String, kind: &'static str, mu_km3_s2: f64, plan: &TransferPlan) -> ProblemOutcome {
    ProblemOutcome {
        name,
        kind,
        mu_km3_s2,
        burns_km_s: plan.legs.iter().map(|leg| leg.delta_v_km_s()).collect(),
        total_delta_v_km_s: plan.total_delta_v_km_s(),
        transfer_time_s: plan.total_time_s(),
    }
}
