//! # Resale Engine
//!
//! A vehicle resale price estimation engine: catalog-driven specification
//! resolution feeding a pre-trained gradient-boosted regression model.
//!
//! ## Features
//!
//! - **Catalog queries**: brands, per-brand models, locations and owner
//!   counts for populating selection widgets
//! - **Spec resolution**: per-model mean defaults with fixed fallbacks, or
//!   full manual specification entry
//! - **Inference**: schema-checked GBDT artifact, log1p target transform
//!   inverted before display
//! - **Importance ranking**: optional per-feature scores for chart display
//!
//! ## Quick Start
//!
//! ```no_run
//! use resale_engine::{Estimator, EstimatorConfig, EstimateRequest, SpecInput, Transmission};
//!
//! // Load both static artifacts once, at startup.
//! let estimator = Estimator::load(&EstimatorConfig::default())?;
//!
//! let request = EstimateRequest {
//!     brand: "Maruti".to_string(),
//!     model: "2017 Maruti Swift VXI".to_string(),
//!     location: "Mumbai".to_string(),
//!     transmission: Transmission::Manual,
//!     car_age: 5,
//!     km_driven: 50_000,
//!     owner_count: 1,
//!     specs: SpecInput::Auto,
//! };
//!
//! let estimate = estimator.estimate(&request)?;
//! println!("Estimated resale price: {}", estimate.formatted_price);
//! # Ok::<(), resale_engine::EstimatorError>(())
//! ```
//!
//! ## Architecture
//!
//! Each estimate runs the same synchronous pipeline:
//!
//! ```text
//! Request → Validation → Spec Resolution → Derived Ratios → Inference → exp_m1 → Display
//! ```
//!
//! The catalog and model are read-only process-wide state; every interaction
//! is an independent, stateless call.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod ml;
pub mod resolver;

// Re-export main types
pub use catalog::Catalog;
pub use config::EstimatorConfig;
pub use display::{format_currency, Estimate};
pub use error::EstimatorError;
pub use ml::model::{FeatureImportance, PriceModel};
pub use ml::schema::FeatureRow;
pub use resolver::request::{
    EstimateRequest, InputMode, ManualSpecs, SpecInput, Transmission,
};

use resolver::resolve;

/// The estimation engine
///
/// Owns the two static artifacts and exposes the single request-handling
/// entry point. Construct once at startup with [`Estimator::load`]; the
/// struct is read-only afterwards and safe to share across threads.
#[derive(Debug, Clone)]
pub struct Estimator {
    catalog: Catalog,
    model: PriceModel,
}

impl Estimator {
    /// Load both artifacts named by `config`
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError::DataError` or `EstimatorError::ModelError` if
    /// an artifact cannot be read, and `EstimatorError::SchemaMismatch` if
    /// the model's feature schema diverges from the engine's row layout.
    pub fn load(config: &EstimatorConfig) -> Result<Self, EstimatorError> {
        let catalog = catalog::loader::load_catalog(&config.catalog_path)?;
        let model = PriceModel::load(&config.model_path)?;
        Ok(Self::new(catalog, model))
    }

    /// Build an estimator from already-loaded artifacts
    pub fn new(catalog: Catalog, model: PriceModel) -> Self {
        Self { catalog, model }
    }

    /// The loaded catalog, for listing queries
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The loaded price model
    pub fn model(&self) -> &PriceModel {
        &self.model
    }

    /// Produce a price estimate for one request
    ///
    /// Validates the request bounds, resolves the fine-grained specs
    /// (catalog means or manual values), computes the derived ratios, runs
    /// inference and inverts the log1p target transform.
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError::InvalidInput` for out-of-bounds requests and
    /// `EstimatorError::SchemaMismatch` if inference fails; neither is
    /// retried.
    pub fn estimate(&self, request: &EstimateRequest) -> Result<Estimate, EstimatorError> {
        request.validate()?;

        let defaults = self.catalog.defaults_for(&request.model);
        let specs = resolve::resolve_specs(&request.model, &request.specs, &defaults);
        let row = resolve::build_feature_row(request, &specs);

        log::debug!(
            "Resolved specs for {:?} ({:?} mode): {:?}",
            request.model,
            request.specs.mode(),
            specs
        );

        let log_price = self.model.predict(&row)?;
        let price = log_price.exp_m1();

        log::debug!("Predicted log price {} -> price {}", log_price, price);

        Ok(Estimate {
            price,
            log_price,
            formatted_price: format_currency(price),
            importance: self.model.ranked_importance(),
        })
    }
}
