//! Re-exported APIs for consumers of the transfer crate.

pub use crate::comparison::{
    ComparisonError, ComparisonRequest, ComparisonRow, ComparisonTable, compare_over_ratios,
};
pub use crate::problems::{ProblemError, ProblemOutcome, evaluate_problem, evaluate_problems};
pub use crate::recommendation::{DepartureRecommendation, recommend_departure};
pub use hohmann_impulsive::{
    BiEllipticResult, DeparturePoint, HPointResult, HohmannResult, InvalidInputError,
    PointResult, TransferLeg, TransferPlan,
};
