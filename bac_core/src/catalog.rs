//! Beverage catalog: standard ABV percentages per beverage type.
//!
//! The catalog is immutable configuration data owned by the engine; values
//! never change at runtime.

use crate::types::BeverageType;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A catalog entry for one beverage type
#[derive(Clone, Debug)]
pub struct Beverage {
    pub name: &'static str,
    pub abv_percent: f64,
}

/// Cached beverage catalog - built once and reused across all operations
static CATALOG: Lazy<HashMap<BeverageType, Beverage>> = Lazy::new(build_catalog);

fn build_catalog() -> HashMap<BeverageType, Beverage> {
    let mut beverages = HashMap::new();

    beverages.insert(
        BeverageType::Beer,
        Beverage {
            name: "Beer",
            abv_percent: 5.0,
        },
    );
    beverages.insert(
        BeverageType::Wine,
        Beverage {
            name: "Wine",
            abv_percent: 12.0,
        },
    );
    beverages.insert(
        BeverageType::Sake,
        Beverage {
            name: "Sake",
            abv_percent: 15.0,
        },
    );
    beverages.insert(
        BeverageType::Shochu,
        Beverage {
            name: "Shochu",
            abv_percent: 25.0,
        },
    );
    beverages.insert(
        BeverageType::Whiskey,
        Beverage {
            name: "Whiskey",
            abv_percent: 40.0,
        },
    );
    beverages.insert(
        BeverageType::Cocktail,
        Beverage {
            name: "Cocktail",
            abv_percent: 20.0,
        },
    );
    beverages.insert(
        BeverageType::Other,
        Beverage {
            name: "Other",
            abv_percent: 10.0,
        },
    );

    beverages
}

/// Get a reference to the cached beverage catalog
pub fn beverages() -> &'static HashMap<BeverageType, Beverage> {
    &CATALOG
}

/// Standard ABV percentage for a beverage type
///
/// An absent type resolves to the `Other` percentage (10%). The enum is
/// closed, so every listed variant has an entry; the fallback covers the
/// `None` case and guards against a catalog gap ever being introduced.
pub fn abv_percent_for(beverage_type: Option<BeverageType>) -> f64 {
    let key = beverage_type.unwrap_or(BeverageType::Other);
    CATALOG
        .get(&key)
        .or_else(|| CATALOG.get(&BeverageType::Other))
        .map(|b| b.abv_percent)
        .unwrap_or(10.0)
}
