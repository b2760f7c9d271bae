//! Specification resolution
//!
//! Turns a request plus per-model defaults into the complete, internally
//! consistent spec set the model needs. Per fine-grained field: manual mode
//! takes the user value; auto mode takes the catalog mean, falling back to a
//! fixed literal when the model has no catalog rows. Every field of the
//! output is guaranteed populated.

use crate::catalog::defaults::{
    ModelDefaults, FALLBACK_BOOTSPACE, FALLBACK_DISPLACEMENT, FALLBACK_FUEL_TANK_CAPACITY,
    FALLBACK_MILEAGE, FALLBACK_SEATING_CAPACITY, FALLBACK_TYRE_LIFE,
};
use crate::ml::schema::FeatureRow;
use crate::resolver::derived;
use crate::resolver::request::{EstimateRequest, SpecInput};
use crate::resolver::segment::{self, PriceSegment};

/// Fully resolved fine-grained specifications
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSpecs {
    /// Fuel tank capacity in liters
    pub fuel_tank_capacity: f64,

    /// Engine displacement in cc
    pub displacement: f64,

    /// Mileage in km per liter
    pub mileage: f64,

    /// Bootspace in liters
    pub bootspace: f64,

    /// Seating capacity
    pub seating_capacity: f64,

    /// Remaining tyre life in percent
    pub avg_tyre_life: f64,

    /// Classified price segment
    pub price_segment: PriceSegment,
}

/// Resolve the fine-grained spec set for one request
pub fn resolve_specs(
    model_name: &str,
    input: &SpecInput,
    defaults: &ModelDefaults,
) -> ResolvedSpecs {
    let price_segment = segment::classify(model_name, defaults);

    match input {
        SpecInput::Manual(specs) => ResolvedSpecs {
            fuel_tank_capacity: specs.fuel_tank_capacity,
            displacement: specs.displacement,
            mileage: specs.mileage,
            bootspace: specs.bootspace,
            seating_capacity: f64::from(specs.seating_capacity),
            avg_tyre_life: specs.avg_tyre_life,
            price_segment,
        },
        SpecInput::Auto => ResolvedSpecs {
            fuel_tank_capacity: defaults
                .fuel_tank_capacity
                .unwrap_or(FALLBACK_FUEL_TANK_CAPACITY),
            displacement: defaults.displacement.unwrap_or(FALLBACK_DISPLACEMENT),
            mileage: defaults.mileage.unwrap_or(FALLBACK_MILEAGE),
            bootspace: defaults.bootspace.unwrap_or(FALLBACK_BOOTSPACE),
            seating_capacity: defaults
                .seating_capacity
                .unwrap_or(FALLBACK_SEATING_CAPACITY),
            avg_tyre_life: defaults.avg_tyre_life.unwrap_or(FALLBACK_TYRE_LIFE),
            price_segment,
        },
    }
}

/// Assemble the model input row from a request and its resolved specs
///
/// This is the single place the twelve-field row is built; the two derived
/// ratios are computed here, after resolution.
pub fn build_feature_row(request: &EstimateRequest, specs: &ResolvedSpecs) -> FeatureRow {
    FeatureRow {
        brand: request.brand.clone(),
        transmission: request.transmission.as_str().to_string(),
        car_location: request.location.clone(),
        price_segment: specs.price_segment.as_str().to_string(),
        km_driven: f64::from(request.km_driven),
        avg_tyre_life: specs.avg_tyre_life,
        fuel_tank_capacity: specs.fuel_tank_capacity,
        displacement: specs.displacement,
        car_age: f64::from(request.car_age),
        no_of_owner: f64::from(request.owner_count),
        mileage_per_cc: derived::mileage_per_cc(specs.mileage, specs.displacement),
        bootspace_per_seat: derived::bootspace_per_seat(specs.bootspace, specs.seating_capacity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::request::{ManualSpecs, Transmission};

    fn request(specs: SpecInput) -> EstimateRequest {
        EstimateRequest {
            brand: "Maruti".to_string(),
            model: "2017 Maruti Swift VXI".to_string(),
            location: "Mumbai".to_string(),
            transmission: Transmission::Manual,
            car_age: 5,
            km_driven: 50_000,
            owner_count: 1,
            specs,
        }
    }

    #[test]
    fn test_auto_empty_match_set_uses_fallback_literals() {
        let resolved = resolve_specs("Phantom Zed", &SpecInput::Auto, &ModelDefaults::default());
        assert_eq!(resolved.fuel_tank_capacity, 40.0);
        assert_eq!(resolved.displacement, 1200.0);
        assert_eq!(resolved.mileage, 18.0);
        assert_eq!(resolved.bootspace, 350.0);
        assert_eq!(resolved.seating_capacity, 5.0);
        assert_eq!(resolved.avg_tyre_life, 80.0);
    }

    #[test]
    fn test_auto_uses_catalog_means() {
        let defaults = ModelDefaults {
            fuel_tank_capacity: Some(42.0),
            displacement: Some(1197.0),
            mileage: Some(21.2),
            bootspace: Some(268.0),
            seating_capacity: Some(5.0),
            avg_tyre_life: Some(72.0),
            price_segment: None,
        };
        let resolved = resolve_specs("2017 Maruti Swift VXI", &SpecInput::Auto, &defaults);
        assert_eq!(resolved.displacement, 1197.0);
        assert!((resolved.mileage - 21.2).abs() < 1e-12);
        assert_eq!(resolved.price_segment, PriceSegment::Budget);
    }

    #[test]
    fn test_manual_passes_through() {
        let specs = ManualSpecs {
            fuel_tank_capacity: 50.0,
            displacement: 1493.0,
            mileage: 17.0,
            bootspace: 433.0,
            seating_capacity: 7,
            avg_tyre_life: 65.0,
        };
        // Defaults present but must be ignored in manual mode.
        let defaults = ModelDefaults {
            displacement: Some(999.0),
            ..ModelDefaults::default()
        };
        let resolved = resolve_specs("2019 Hyundai Creta SX", &SpecInput::Manual(specs), &defaults);
        assert_eq!(resolved.displacement, 1493.0);
        assert_eq!(resolved.seating_capacity, 7.0);
        assert_eq!(resolved.avg_tyre_life, 65.0);
    }

    #[test]
    fn test_feature_row_fully_populated() {
        let request = request(SpecInput::Auto);
        let resolved = resolve_specs(&request.model, &request.specs, &ModelDefaults::default());
        let row = build_feature_row(&request, &resolved);

        assert_eq!(row.brand, "Maruti");
        assert_eq!(row.transmission, "Manual");
        assert_eq!(row.car_location, "Mumbai");
        assert_eq!(row.price_segment, "Budget");
        assert_eq!(row.km_driven, 50_000.0);
        assert_eq!(row.car_age, 5.0);
        assert_eq!(row.no_of_owner, 1.0);
        for value in [
            row.avg_tyre_life,
            row.fuel_tank_capacity,
            row.displacement,
            row.mileage_per_cc,
            row.bootspace_per_seat,
        ] {
            assert!(value.is_finite());
        }
    }

    #[test]
    fn test_derived_ratios_guard_zero_denominators() {
        let specs = ManualSpecs {
            fuel_tank_capacity: 40.0,
            displacement: 0.0,
            mileage: 18.0,
            bootspace: 300.0,
            seating_capacity: 5,
            avg_tyre_life: 80.0,
        };
        let request = request(SpecInput::Manual(specs));
        let resolved = resolve_specs(&request.model, &request.specs, &ModelDefaults::default());
        let row = build_feature_row(&request, &resolved);
        assert_eq!(row.mileage_per_cc, 0.0);
    }

    #[test]
    fn test_mid_name_forces_midrange_segment() {
        let resolved = resolve_specs("Alto Mid Variant", &SpecInput::Auto, &ModelDefaults::default());
        assert_eq!(resolved.price_segment, PriceSegment::MidRange);
    }
}
