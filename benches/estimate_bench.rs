//! Performance benchmarks for the estimation pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resale_engine::catalog::entry::{extract_brand, CatalogEntry};
use resale_engine::{
    Catalog, EstimateRequest, Estimator, PriceModel, SpecInput, Transmission,
};

fn synthetic_catalog(rows: usize) -> Catalog {
    let names = [
        "2017 Maruti Swift VXI",
        "2018 Maruti Baleno Zeta",
        "2019 Hyundai Creta SX",
        "2016 Hyundai i20 Asta",
        "2020 Tata Nexon XZ",
    ];
    let entries = (0..rows)
        .map(|i| {
            let name = names[i % names.len()];
            CatalogEntry {
                name_model: name.to_string(),
                brand: extract_brand(name).map(str::to_string),
                car_location: "Mumbai".to_string(),
                transmission: "Manual".to_string(),
                price_segment: "Budget".to_string(),
                km_driven: 30_000.0 + (i % 50) as f64 * 1_000.0,
                avg_tyre_life: 60.0 + (i % 40) as f64,
                fuel_tank_capacity: 40.0,
                displacement: 1_200.0,
                mileage: 18.0 + (i % 8) as f64,
                bootspace: 300.0,
                seating_capacity: 5.0,
                no_of_owner: 1.0 + (i % 3) as f64,
                car_age: 2.0 + (i % 10) as f64,
            }
        })
        .collect();
    Catalog::new(entries)
}

fn synthetic_model() -> PriceModel {
    let json = r#"{
        "features": [
            {"kind":"categorical","name":"brand","vocab":["Hyundai","Maruti","Tata"]},
            {"kind":"categorical","name":"transmission","vocab":["Automatic","Manual"]},
            {"kind":"categorical","name":"car_location","vocab":["Mumbai"]},
            {"kind":"categorical","name":"price_segment","vocab":["Budget","Mid-Range"]},
            {"kind":"numeric","name":"km_driven"},
            {"kind":"numeric","name":"avg_tyre_life%"},
            {"kind":"numeric","name":"fuel_tank_capacity"},
            {"kind":"numeric","name":"displacement"},
            {"kind":"numeric","name":"car_age"},
            {"kind":"numeric","name":"no_of_owner"},
            {"kind":"numeric","name":"mileage_per_cc"},
            {"kind":"numeric","name":"bootspace_per_seat"}
        ],
        "base_score": 12.0,
        "trees": [
            {"nodes": [
                {"type":"split","feature":4,"threshold":60000.0,"left":1,"right":2},
                {"type":"leaf","value":0.3},
                {"type":"leaf","value":-0.3}
            ]},
            {"nodes": [
                {"type":"split","feature":8,"threshold":5.0,"left":1,"right":2},
                {"type":"leaf","value":0.2},
                {"type":"leaf","value":-0.2}
            ]}
        ]
    }"#;
    PriceModel::from_json(json).expect("valid artifact")
}

fn bench_estimate(c: &mut Criterion) {
    // 10k catalog rows: per-model means are recomputed on every request.
    let estimator = Estimator::new(synthetic_catalog(10_000), synthetic_model());

    let request = EstimateRequest {
        brand: "Maruti".to_string(),
        model: "2017 Maruti Swift VXI".to_string(),
        location: "Mumbai".to_string(),
        transmission: Transmission::Manual,
        car_age: 5,
        km_driven: 50_000,
        owner_count: 1,
        specs: SpecInput::Auto,
    };

    c.bench_function("estimate_auto_10k_rows", |b| {
        b.iter(|| {
            let _ = estimator.estimate(black_box(&request));
        });
    });
}

criterion_group!(benches, bench_estimate);
criterion_main!(benches);
