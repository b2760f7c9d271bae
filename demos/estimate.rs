//! Demo: produce one price estimate from the command line
//!
//! Usage:
//!
//! ```text
//! cargo run --example estimate -- <catalog.csv> <model.json> "<name_model>" [age] [km] [owners]
//! ```

use std::path::PathBuf;

use resale_engine::catalog::entry::extract_brand;
use resale_engine::{EstimateRequest, Estimator, EstimatorConfig, SpecInput, Transmission};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "Usage: {} <catalog.csv> <model.json> \"<name_model>\" [age] [km] [owners]",
            args[0]
        );
        std::process::exit(2);
    }

    let config = EstimatorConfig {
        catalog_path: PathBuf::from(&args[1]),
        model_path: PathBuf::from(&args[2]),
    };
    let model = args[3].clone();
    let car_age: u32 = args.get(4).map(|s| s.parse()).transpose()?.unwrap_or(5);
    let km_driven: u32 = args.get(5).map(|s| s.parse()).transpose()?.unwrap_or(50_000);
    let owner_count: u32 = args.get(6).map(|s| s.parse()).transpose()?.unwrap_or(1);

    let estimator = Estimator::load(&config)?;

    let brand = extract_brand(&model)
        .unwrap_or_default()
        .to_string();
    let location = estimator
        .catalog()
        .locations()
        .into_iter()
        .next()
        .unwrap_or_else(|| "NA".to_string());

    let request = EstimateRequest {
        brand,
        model,
        location,
        transmission: Transmission::Manual,
        car_age,
        km_driven,
        owner_count,
        specs: SpecInput::Auto,
    };

    let estimate = estimator.estimate(&request)?;

    println!("Estimated resale price: {}", estimate.formatted_price);
    println!("  raw log price: {:.4}", estimate.log_price);
    if let Some(importance) = &estimate.importance {
        println!("  top feature importances:");
        for item in importance.iter().take(5) {
            println!("    {:<20} {:.2}", item.feature, item.score);
        }
    }
    println!("Disclaimer: machine-generated estimate; actual market values may vary.");

    Ok(())
}
