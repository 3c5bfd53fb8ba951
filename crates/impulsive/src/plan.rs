//! Burn-by-burn view of a transfer, shared by every calculator result.

use serde::Serialize;

/// One impulsive burn and the coast arc that follows it.
///
/// The burn happens at `departure_radius_km`; the coast ends at `arrival_radius_km`. The
/// final burn of a plan circularizes in place, so its radii coincide and `coast_time_s` is 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransferLeg {
    pub departure_radius_km: f64,
    pub arrival_radius_km: f64,
    pub velocity_before_km_s: f64,
    pub velocity_after_km_s: f64,
    pub coast_time_s: f64,
}

impl TransferLeg {
    pub fn delta_v_km_s(&self) -> f64 {
        (self.velocity_after_km_s - self.velocity_before_km_s).abs()
    }
}

/// Ordered burns of a complete transfer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferPlan {
    pub legs: Vec<TransferLeg>,
}

impl TransferPlan {
    pub fn new(legs: Vec<TransferLeg>) -> Self {
        Self { legs }
    }

    pub fn burn_count(&self) -> usize {
        self.legs.len()
    }

    /// Sum of the burn magnitudes.
    pub fn total_delta_v_km_s(&self) -> f64 {
        self.legs.iter().map(TransferLeg::delta_v_km_s).sum()
    }

    /// Sum of the coast arcs between burns.
    pub fn total_time_s(&self) -> f64 {
        self.legs.iter().map(|leg| leg.coast_time_s).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(before: f64, after: f64, coast: f64) -> TransferLeg {
        TransferLeg {
            departure_radius_km: 7_000.0,
            arrival_radius_km: 9_000.0,
            velocity_before_km_s: before,
            velocity_after_km_s: after,
            coast_time_s: coast,
        }
    }

    #[test]
    fn totals_sum_magnitudes_and_coasts() {
        let plan = TransferPlan::new(vec![leg(7.5, 8.0, 3_000.0), leg(7.0, 6.5, 0.0)]);
        assert_eq!(plan.burn_count(), 2);
        assert!((plan.total_delta_v_km_s() - 1.0).abs() < 1e-12);
        assert_eq!(plan.total_time_s(), 3_000.0);
    }

    #[test]
    fn retrograde_burn_counts_as_positive_delta_v() {
        assert!((leg(8.0, 7.25, 0.0).delta_v_km_s() - 0.75).abs() < 1e-12);
    }
}
