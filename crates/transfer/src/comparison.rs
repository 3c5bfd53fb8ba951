//! Hohmann versus bi-elliptic Δv sweep over increasing radius ratios.

use hohmann_core::constants::MU_EARTH_KM3_S2;
use hohmann_impulsive::{InvalidInputError, bi_elliptic, hohmann};
use serde::Serialize;
use thiserror::Error;

/// Sweep parameters. The bi-elliptic intermediate radius is `intermediate_factor` times the
/// larger endpoint radius.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRequest {
    pub r1_km: f64,
    pub ratios: Vec<f64>,
    pub intermediate_factor: f64,
    pub mu_km3_s2: f64,
}

impl Default for ComparisonRequest {
    fn default() -> Self {
        Self {
            r1_km: 7_000.0,
            ratios: (2..=21).map(f64::from).collect(),
            intermediate_factor: 2.0,
            mu_km3_s2: MU_EARTH_KM3_S2,
        }
    }
}

impl ComparisonRequest {
    /// Integer-stepped ratios from `start` to `end` inclusive.
    pub fn with_ratio_range(mut self, start: u32, end: u32) -> Self {
        self.ratios = (start..=end).map(f64::from).collect();
        self
    }
}

/// One ratio of the sweep. `difference` is bi-elliptic minus Hohmann total Δv.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub ratio: f64,
    pub r2_km: f64,
    pub r_intermediate_km: f64,
    pub hohmann_total_dv_km_s: f64,
    pub bielliptic_total_dv_km_s: f64,
    pub difference_km_s: f64,
    pub hohmann_time_s: f64,
    pub bielliptic_time_s: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub r1_km: f64,
    pub intermediate_factor: f64,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// First ratio at which the bi-elliptic transfer needs less Δv than Hohmann.
    pub fn crossover_ratio(&self) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.difference_km_s < 0.0)
            .map(|row| row.ratio)
    }

    /// Number of times the sign of `difference` flips along the sweep.
    pub fn sign_changes(&self) -> usize {
        self.rows
            .windows(2)
            .filter(|pair| (pair[0].difference_km_s < 0.0) != (pair[1].difference_km_s < 0.0))
            .count()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ComparisonError {
    #[error("comparison needs at least one radius ratio")]
    NoRatios,
    #[error("radius ratios must be positive and increasing (got {0})")]
    InvalidRatio(f64),
    #[error("intermediate factor must exceed 1 (got {0})")]
    InvalidFactor(f64),
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

/// Evaluate both transfers for every ratio of the request.
pub fn compare_over_ratios(request: &ComparisonRequest) -> Result<ComparisonTable, ComparisonError> {
    if request.ratios.is_empty() {
        return Err(ComparisonError::NoRatios);
    }
    if request.intermediate_factor.is_nan() || request.intermediate_factor <= 1.0 {
        return Err(ComparisonError::InvalidFactor(request.intermediate_factor));
    }
    let mut previous = 0.0;
    for &ratio in &request.ratios {
        if !ratio.is_finite() || ratio <= previous {
            return Err(ComparisonError::InvalidRatio(ratio));
        }
        previous = ratio;
    }

    let mut rows = Vec::with_capacity(request.ratios.len());
    for &ratio in &request.ratios {
        let r2 = request.r1_km * ratio;
        let r_intermediate = r2.max(request.r1_km) * request.intermediate_factor;
        let ho = hohmann(request.r1_km, r2, request.mu_km3_s2)?;
        let bi = bi_elliptic(request.r1_km, r2, r_intermediate, request.mu_km3_s2)?;
        rows.push(ComparisonRow {
            ratio,
            r2_km: r2,
            r_intermediate_km: r_intermediate,
            hohmann_total_dv_km_s: ho.total_delta_v,
            bielliptic_total_dv_km_s: bi.total_delta_v,
            difference_km_s: bi.total_delta_v - ho.total_delta_v,
            hohmann_time_s: ho.transfer_time,
            bielliptic_time_s: bi.total_time,
        });
    }

    let table = ComparisonTable {
        r1_km: request.r1_km,
        intermediate_factor: request.intermediate_factor,
        rows,
    };
    match table.crossover_ratio() {
        Some(ratio) => log::info!("bi-elliptic overtakes Hohmann at ratio {ratio}"),
        None => log::info!("Hohmann stays cheaper over the whole sweep"),
    }
    Ok(table)
}
