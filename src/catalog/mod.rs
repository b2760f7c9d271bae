//! Catalog of past vehicle listings
//!
//! The catalog backs two things:
//! - the listing queries a UI populates its selection widgets from
//!   (brands, per-brand models, locations, owner counts)
//! - per-model mean specifications used as auto-fill defaults
//!
//! It is loaded once at startup and never mutated.

pub mod defaults;
pub mod entry;
pub mod loader;

use crate::catalog::defaults::ModelDefaults;
use crate::catalog::entry::CatalogEntry;

/// In-memory catalog of vehicle listings
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from pre-parsed entries
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog has no rows
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All rows
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Sorted distinct brands, excluding brandless rows
    pub fn brands(&self) -> Vec<String> {
        let mut brands: Vec<String> = self
            .entries
            .iter()
            .filter_map(|e| e.brand.clone())
            .collect();
        brands.sort();
        brands.dedup();
        brands
    }

    /// Distinct model names for a brand, in first-seen order
    pub fn models_for_brand(&self, brand: &str) -> Vec<String> {
        let mut models = Vec::new();
        for entry in &self.entries {
            if entry.brand.as_deref() == Some(brand) && !models.contains(&entry.name_model) {
                models.push(entry.name_model.clone());
            }
        }
        models
    }

    /// Sorted distinct registration locations
    ///
    /// Locations of two characters or fewer are dropped; the source data uses
    /// short codes for unknown registrations.
    pub fn locations(&self) -> Vec<String> {
        let mut locations: Vec<String> = self
            .entries
            .iter()
            .filter(|e| e.car_location.chars().count() > 2)
            .map(|e| e.car_location.clone())
            .collect();
        locations.sort();
        locations.dedup();
        locations
    }

    /// Sorted distinct owner counts
    pub fn owner_counts(&self) -> Vec<u32> {
        let mut owners: Vec<u32> = self
            .entries
            .iter()
            .map(|e| e.no_of_owner.round() as u32)
            .collect();
        owners.sort_unstable();
        owners.dedup();
        owners
    }

    /// Mean specifications over all rows matching `model` exactly
    ///
    /// Recomputed on every call. A model with no rows yields all-`None`
    /// defaults, which resolve to the fixed fallback literals.
    pub fn defaults_for(&self, model: &str) -> ModelDefaults {
        let rows: Vec<&CatalogEntry> = self
            .entries
            .iter()
            .filter(|e| e.name_model == model)
            .collect();
        ModelDefaults::compute(&rows)
    }
}
