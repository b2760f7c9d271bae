//! Catalog row types and brand extraction
//!
//! The catalog CSV stores the brand inside the combined `name_model` column
//! ("2017 Maruti Swift VXI" style). The brand is the second whitespace token;
//! rows whose name has fewer than two tokens carry no brand and never appear
//! in brand listings, but still participate in per-model statistics.

use serde::Deserialize;

/// Raw catalog row as deserialized from the CSV artifact
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    /// Combined listing name, containing the brand as its second token
    pub name_model: String,

    /// Registration location
    pub car_location: String,

    /// Transmission type ("Manual" / "Automatic")
    pub transmission: String,

    /// Price segment label ("Budget" / "Mid-Range")
    pub price_segment: String,

    /// Kilometers driven
    pub km_driven: f64,

    /// Remaining tyre life in percent
    #[serde(rename = "avg_tyre_life%")]
    pub avg_tyre_life: f64,

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

    /// Number of previous owners
    pub no_of_owner: f64,

    /// Vehicle age in years
    pub car_age: f64,
}

/// Catalog entry with the derived brand attached
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Combined listing name
    pub name_model: String,

    /// Brand parsed from `name_model`; `None` when the name is too short
    pub brand: Option<String>,

    /// Registration location
    pub car_location: String,

    /// Transmission type
    pub transmission: String,

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

    /// Mileage in km per liter
    pub mileage: f64,

    /// Bootspace in liters
    pub bootspace: f64,

    /// Seating capacity
    pub seating_capacity: f64,

    /// Number of previous owners
    pub no_of_owner: f64,

    /// Vehicle age in years
    pub car_age: f64,
}

impl From<CatalogRecord> for CatalogEntry {
    fn from(record: CatalogRecord) -> Self {
        let brand = extract_brand(&record.name_model).map(str::to_string);
        Self {
            name_model: record.name_model,
            brand,
            car_location: record.car_location,
            transmission: record.transmission,
            price_segment: record.price_segment,
            km_driven: record.km_driven,
            avg_tyre_life: record.avg_tyre_life,
            fuel_tank_capacity: record.fuel_tank_capacity,
            displacement: record.displacement,
            mileage: record.mileage,
            bootspace: record.bootspace,
            seating_capacity: record.seating_capacity,
            no_of_owner: record.no_of_owner,
            car_age: record.car_age,
        }
    }
}

/// Extract the brand from a combined listing name
///
/// The brand is the second whitespace-separated token of the name.
///
/// # Example
///
/// ```
/// use resale_engine::catalog::entry::extract_brand;
///
/// assert_eq!(extract_brand("2017 Maruti Swift VXI"), Some("Maruti"));
/// assert_eq!(extract_brand("Swift"), None);
/// ```
pub fn extract_brand(name_model: &str) -> Option<&str> {
    name_model.split_whitespace().nth(1)
}
