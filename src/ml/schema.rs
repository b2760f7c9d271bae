//! Fixed model-input schema
//!
//! The trained model accepts exactly twelve features, in the order fixed at
//! training time. The row is a plain struct rather than a dynamic map so the
//! field set is checked at compile time; the artifact's own feature list is
//! checked against [`FEATURE_NAMES`] at load time.

/// Names of the twelve model-input features, in training order
pub const FEATURE_NAMES: [&str; 12] = [
    "brand",
    "transmission",
    "car_location",
    "price_segment",
    "km_driven",
    "avg_tyre_life%",
    "fuel_tank_capacity",
    "displacement",
    "car_age",
    "no_of_owner",
    "mileage_per_cc",
    "bootspace_per_seat",
];

/// One model-input value: a categorical label or a numeric scalar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue<'a> {
    /// Categorical label, encoded via the artifact's vocabulary
    Categorical(&'a str),
    /// Numeric scalar, passed through unchanged
    Numeric(f64),
}

/// The complete model input row
///
/// Every field is always populated; construction goes through
/// [`build_feature_row`](crate::resolver::resolve::build_feature_row).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    /// Vehicle brand
    pub brand: String,

    /// Transmission label
    pub transmission: String,

    /// Registration location
    pub car_location: String,

    /// Price segment label
    pub price_segment: String,

    /// Kilometers driven
    pub km_driven: f64,

    /// Remaining tyre life in percent
    pub avg_tyre_life: f64,

    /// Fuel tank capacity in liters
    pub fuel_tank_capacity: f64,

    /// Engine displacement in cc
    pub displacement: f64,

    /// Vehicle age in years
    pub car_age: f64,

    /// Number of previous owners
    pub no_of_owner: f64,

    /// Mileage per cc of displacement (derived)
    pub mileage_per_cc: f64,

    /// Bootspace per seat (derived)
    pub bootspace_per_seat: f64,
}

impl FeatureRow {
    /// Field values in [`FEATURE_NAMES`] order
    pub fn values(&self) -> [FeatureValue<'_>; 12] {
        [
            FeatureValue::Categorical(&self.brand),
            FeatureValue::Categorical(&self.transmission),
            FeatureValue::Categorical(&self.car_location),
            FeatureValue::Categorical(&self.price_segment),
            FeatureValue::Numeric(self.km_driven),
            FeatureValue::Numeric(self.avg_tyre_life),
            FeatureValue::Numeric(self.fuel_tank_capacity),
            FeatureValue::Numeric(self.displacement),
            FeatureValue::Numeric(self.car_age),
            FeatureValue::Numeric(self.no_of_owner),
            FeatureValue::Numeric(self.mileage_per_cc),
            FeatureValue::Numeric(self.bootspace_per_seat),
        ]
    }
}
