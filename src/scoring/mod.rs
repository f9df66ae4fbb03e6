pub mod adjustments;
pub mod bands;
pub mod fuser;
pub mod recommendations;

pub use adjustments::{clamp_score, seed_score, AdjustmentScorer, SignalAdjustments};
pub use bands::{bias_from_score, fact_check_from_score, indicators, status_from_score};
pub use fuser::{fuse, ScoringFuser};
pub use recommendations::recommendations_for;
