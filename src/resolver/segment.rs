//! Price segment heuristic
//!
//! Segment classification is not learned: a model is `Mid-Range` if its name
//! contains the substring `"Mid"`, or if the per-model defaults recorded a
//! `Mid-Range` segment. Everything else is `Budget`.
//!
//! The secondary check inherits a quirk of the source data pipeline: the
//! defaults only carry a segment when the match set is unanimous, so for most
//! models the check never fires and the name substring decides alone. Treat
//! the defaults-based signal as unreliable.

use crate::catalog::defaults::ModelDefaults;

/// Segment label for mid-range vehicles
pub const MID_RANGE_LABEL: &str = "Mid-Range";

/// Segment label for budget vehicles
pub const BUDGET_LABEL: &str = "Budget";

/// Coarse price segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSegment {
    /// Budget segment
    Budget,
    /// Mid-range segment
    MidRange,
}

impl PriceSegment {
    /// Label as the model vocabulary stores it
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceSegment::Budget => BUDGET_LABEL,
            PriceSegment::MidRange => MID_RANGE_LABEL,
        }
    }
}

/// Classify a model's price segment
pub fn classify(model_name: &str, defaults: &ModelDefaults) -> PriceSegment {
    if model_name.contains("Mid") || defaults.price_segment.as_deref() == Some(MID_RANGE_LABEL) {
        PriceSegment::MidRange
    } else {
        PriceSegment::Budget
    }
}
