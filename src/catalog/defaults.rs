//! Per-model default specifications
//!
//! When the user opts out of manual spec entry, the engine auto-fills each
//! fine-grained field with the arithmetic mean of that column over all catalog
//! rows sharing the selected model name. A model with no catalog rows falls
//! back to the fixed literals below.

use crate::catalog::entry::CatalogEntry;

/// Fallback fuel tank capacity in liters
pub const FALLBACK_FUEL_TANK_CAPACITY: f64 = 40.0;

/// Fallback engine displacement in cc
pub const FALLBACK_DISPLACEMENT: f64 = 1200.0;

/// Fallback mileage in km per liter
pub const FALLBACK_MILEAGE: f64 = 18.0;

/// Fallback bootspace in liters
pub const FALLBACK_BOOTSPACE: f64 = 350.0;

/// Fallback seating capacity
pub const FALLBACK_SEATING_CAPACITY: f64 = 5.0;

/// Fallback remaining tyre life in percent
pub const FALLBACK_TYRE_LIFE: f64 = 80.0;

/// Mean specifications for one model name
///
/// Recomputed on every lookup; never cached. A field is `None` when the match
/// set is empty. `price_segment` is populated only when every matching row
/// agrees on the label; a mixed match set yields `None`, so the segment
/// heuristic falls through to the model-name check. See
/// [`classify`](crate::resolver::segment::classify).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelDefaults {
    /// Mean fuel tank capacity
    pub fuel_tank_capacity: Option<f64>,

    /// Mean engine displacement
    pub displacement: Option<f64>,

    /// Mean mileage
    pub mileage: Option<f64>,

    /// Mean bootspace
    pub bootspace: Option<f64>,

    /// Mean seating capacity
    pub seating_capacity: Option<f64>,

    /// Mean remaining tyre life
    pub avg_tyre_life: Option<f64>,

    /// Segment label shared by all matching rows, if unanimous
    pub price_segment: Option<String>,
}

impl ModelDefaults {
    /// Compute defaults over the given match set
    ///
    /// An empty slice yields the all-`None` defaults, which resolve to the
    /// fallback literals above.
    pub fn compute(rows: &[&CatalogEntry]) -> Self {
        if rows.is_empty() {
            return Self::default();
        }

        let price_segment = unanimous_segment(rows);

        Self {
            fuel_tank_capacity: mean(rows.iter().map(|r| r.fuel_tank_capacity)),
            displacement: mean(rows.iter().map(|r| r.displacement)),
            mileage: mean(rows.iter().map(|r| r.mileage)),
            bootspace: mean(rows.iter().map(|r| r.bootspace)),
            seating_capacity: mean(rows.iter().map(|r| r.seating_capacity)),
            avg_tyre_life: mean(rows.iter().map(|r| r.avg_tyre_life)),
            price_segment,
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

fn unanimous_segment(rows: &[&CatalogEntry]) -> Option<String> {
    let first = &rows[0].price_segment;
    if rows.iter().all(|r| r.price_segment == *first) {
        Some(first.clone())
    } else {
        None
    }
}
