//! Demo fleet seed
//!
//! The five routes the service is seeded with at startup. R002 starts as
//! the designated baseline.

use fueleu_core::{FuelType, Route, VesselType};

/// The seeded demo fleet (R001-R005, reporting years 2024/2025).
pub fn sample_fleet() -> Vec<Route> {
    vec![
        Route::new(
            "R001",
            VesselType::Container,
            FuelType::Hfo,
            2024,
            91.0,
            5000.0,
            12000.0,
            4500.0,
        ),
        Route::new(
            "R002",
            VesselType::BulkCarrier,
            FuelType::Lng,
            2024,
            88.0,
            4800.0,
            11500.0,
            4200.0,
        )
        .as_baseline(),
        Route::new(
            "R003",
            VesselType::Tanker,
            FuelType::Mgo,
            2024,
            93.5,
            5100.0,
            12500.0,
            4700.0,
        ),
        Route::new(
            "R004",
            VesselType::RoRo,
            FuelType::Hfo,
            2025,
            89.2,
            4900.0,
            11800.0,
            4300.0,
        ),
        Route::new(
            "R005",
            VesselType::Container,
            FuelType::Lng,
            2025,
            90.5,
            4950.0,
            11900.0,
            4400.0,
        ),
    ]
}
