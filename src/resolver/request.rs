//! Estimate request types and input bounds
//!
//! A request carries everything a UI collects: the vehicle selection, the
//! coarse usage inputs (age, distance, owners), and either a full manual
//! specification set or the choice to auto-fill from catalog means.
//!
//! Bounds mirror the interaction surface: the auto-fill mode exposes coarser
//! controls with tighter ranges than the detailed manual form.

use crate::error::EstimatorError;

/// Maximum vehicle age in auto-fill mode (years)
pub const AUTO_MAX_CAR_AGE: u32 = 20;

/// Maximum vehicle age in manual mode (years)
pub const MANUAL_MAX_CAR_AGE: u32 = 30;

/// Maximum distance driven in auto-fill mode (km)
pub const AUTO_MAX_KM_DRIVEN: u32 = 300_000;

/// Maximum distance driven in manual mode (km)
pub const MANUAL_MAX_KM_DRIVEN: u32 = 500_000;

/// Maximum accepted owner count
pub const MAX_OWNER_COUNT: u32 = 10;

/// Seating capacities the manual form offers
pub const ALLOWED_SEATING: [u32; 4] = [4, 5, 6, 7];

/// Specification input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Auto-fill fine-grained specs from per-model catalog means
    Auto,
    /// User supplies the full fine-grained spec set
    Manual,
}

/// Transmission type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transmission {
    /// Manual gearbox
    Manual,
    /// Automatic gearbox
    Automatic,
}

impl Transmission {
    /// Label as stored in the catalog and the model vocabulary
    pub fn as_str(&self) -> &'static str {
        match self {
            Transmission::Manual => "Manual",
            Transmission::Automatic => "Automatic",
        }
    }
}

/// Fine-grained specifications entered by the user in manual mode
#[derive(Debug, Clone, PartialEq)]
pub struct ManualSpecs {
    /// Fuel tank capacity in liters
    pub fuel_tank_capacity: f64,

    /// Engine displacement in cc
    pub displacement: f64,

    /// Mileage in km per liter
    pub mileage: f64,

    /// Bootspace in liters
    pub bootspace: f64,

    /// Seating capacity (one of [`ALLOWED_SEATING`])
    pub seating_capacity: u32,

    /// Remaining tyre life in percent (0-100)
    pub avg_tyre_life: f64,
}

/// Fine-grained spec input: auto-fill or a full manual set
#[derive(Debug, Clone, PartialEq)]
pub enum SpecInput {
    /// Auto-fill from per-model catalog means
    Auto,
    /// Full manual specification set
    Manual(ManualSpecs),
}

impl SpecInput {
    /// The input mode this variant represents
    pub fn mode(&self) -> InputMode {
        match self {
            SpecInput::Auto => InputMode::Auto,
            SpecInput::Manual(_) => InputMode::Manual,
        }
    }
}

/// One complete estimation request
///
/// Immutable snapshot of a single user interaction. Validation enforces the
/// documented per-field bounds; everything beyond bounds (unknown model names,
/// unseen locations) is handled downstream by fallbacks and the model's
/// unseen-category bucket, never rejected here.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateRequest {
    /// Selected brand
    pub brand: String,

    /// Selected model name (the catalog's combined `name_model` string)
    pub model: String,

    /// Registration location
    pub location: String,

    /// Transmission type
    pub transmission: Transmission,

    /// Vehicle age in years
    pub car_age: u32,

    /// Distance driven in km
    pub km_driven: u32,

    /// Number of previous owners
    pub owner_count: u32,

    /// Fine-grained spec input
    pub specs: SpecInput,
}

impl EstimateRequest {
    /// Validate the request against the documented input bounds
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError::InvalidInput` naming the offending field.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        let (max_age, max_km) = match self.specs.mode() {
            InputMode::Auto => (AUTO_MAX_CAR_AGE, AUTO_MAX_KM_DRIVEN),
            InputMode::Manual => (MANUAL_MAX_CAR_AGE, MANUAL_MAX_KM_DRIVEN),
        };

        if self.car_age > max_age {
            return Err(EstimatorError::InvalidInput(format!(
                "car age {} exceeds maximum {}",
                self.car_age, max_age
            )));
        }

        if self.km_driven > max_km {
            return Err(EstimatorError::InvalidInput(format!(
                "km driven {} exceeds maximum {}",
                self.km_driven, max_km
            )));
        }

        if self.owner_count > MAX_OWNER_COUNT {
            return Err(EstimatorError::InvalidInput(format!(
                "owner count {} exceeds maximum {}",
                self.owner_count, MAX_OWNER_COUNT
            )));
        }

        if let SpecInput::Manual(specs) = &self.specs {
            validate_manual_specs(specs)?;
        }

        Ok(())
    }
}

fn validate_manual_specs(specs: &ManualSpecs) -> Result<(), EstimatorError> {
    check_non_negative("fuel tank capacity", specs.fuel_tank_capacity)?;
    check_non_negative("displacement", specs.displacement)?;
    check_non_negative("mileage", specs.mileage)?;
    check_non_negative("bootspace", specs.bootspace)?;

    if !specs.avg_tyre_life.is_finite()
        || !(0.0..=100.0).contains(&specs.avg_tyre_life)
    {
        return Err(EstimatorError::InvalidInput(format!(
            "tyre life {} outside 0-100%",
            specs.avg_tyre_life
        )));
    }

    if !ALLOWED_SEATING.contains(&specs.seating_capacity) {
        return Err(EstimatorError::InvalidInput(format!(
            "seating capacity {} not offered (expected one of {:?})",
            specs.seating_capacity, ALLOWED_SEATING
        )));
    }

    Ok(())
}

fn check_non_negative(field: &str, value: f64) -> Result<(), EstimatorError> {
    if !value.is_finite() || value < 0.0 {
        return Err(EstimatorError::InvalidInput(format!(
            "{} must be a non-negative number, got {}",
            field, value
        )));
    }
    Ok(())
}
