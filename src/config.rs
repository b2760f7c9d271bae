//! Configuration for the estimation engine

use std::path::PathBuf;

/// Estimator configuration
///
/// Points the engine at its two static artifacts. Both are read exactly once,
/// when the [`Estimator`](crate::Estimator) is constructed.
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    /// Path to the catalog CSV (default: `dataset/cleaned_car_data.csv`)
    pub catalog_path: PathBuf,

    /// Path to the trained model artifact (default: `models/resale_gbdt.json`)
    pub model_path: PathBuf,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("dataset/cleaned_car_data.csv"),
            model_path: PathBuf::from("models/resale_gbdt.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = EstimatorConfig::default();
        assert_eq!(
            config.catalog_path,
            PathBuf::from("dataset/cleaned_car_data.csv")
        );
        assert_eq!(config.model_path, PathBuf::from("models/resale_gbdt.json"));
    }
}
