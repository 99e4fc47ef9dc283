#![forbid(unsafe_code)]

//! Core domain model and BAC estimation logic for bactrack.
//!
//! This crate provides:
//! - Domain types (drink events, profiles, status levels)
//! - Beverage catalog (standard ABV percentages)
//! - Widmark-based BAC estimation engine
//! - Drink log reading (JSONL/CSV)
//! - Configuration and logging setup

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod records;
pub mod types;

// Re-export commonly used types
pub use catalog::{abv_percent_for, beverages, Beverage};
pub use config::Config;
pub use engine::{alcohol_grams, bac_contribution, evaluate, total_bac};
pub use error::{Error, Result};
pub use records::load_drinks;
pub use types::*;
