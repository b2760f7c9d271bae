//! Demo: print the listing queries a UI would populate its widgets from
//!
//! Usage:
//!
//! ```text
//! cargo run --example catalog_summary -- <catalog.csv>
//! ```

use std::path::Path;

use resale_engine::catalog::loader::load_catalog;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <catalog.csv>", args[0]);
        std::process::exit(2);
    }

    let catalog = load_catalog(Path::new(&args[1]))?;

    println!("Catalog: {} rows", catalog.len());

    let brands = catalog.brands();
    println!("Brands ({}):", brands.len());
    for brand in &brands {
        let models = catalog.models_for_brand(brand);
        println!("  {:<12} {} models", brand, models.len());
    }

    println!("Locations: {}", catalog.locations().join(", "));
    println!(
        "Owner counts: {}",
        catalog
            .owner_counts()
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}
