//! Core domain types for the BAC estimation engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Drink events and their beverage classification
//! - Physiological profiles
//! - BAC results and status levels

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Beverage and Profile Types
// ============================================================================

/// Kind of beverage consumed
///
/// A closed enumeration; anything not covered maps to `Other` via the
/// catalog fallback rather than failing.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BeverageType {
    Beer,
    Wine,
    Sake,
    Shochu,
    Whiskey,
    Cocktail,
    Other,
}

/// Sex used for the Widmark body-water distribution ratio
///
/// `Unspecified` falls back to the male ratio; a simplifying default for
/// incomplete profiles, not a physiological claim.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unspecified,
}

/// A single recorded drink
///
/// Owned entirely by the caller; the engine reads it, never stores it.
/// `volume_ml` of `None` means the amount was not recorded and the drink
/// contributes zero alcohol mass.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DrinkEvent {
    pub id: Uuid,
    pub volume_ml: Option<f64>,
    pub beverage_type: Option<BeverageType>,
    pub occurred_at: DateTime<Utc>,
}

/// Physiological profile supplied per calculation call
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Profile {
    pub weight_kg: f64,
    pub sex: Sex,
}

// ============================================================================
// Result Types
// ============================================================================

/// Qualitative severity tier for a BAC value
///
/// Five ordered tiers with half-open boundaries: inclusive below,
/// exclusive above, final tier unbounded.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Normal,
    Mild,
    Moderate,
    High,
    Severe,
}

impl StatusLevel {
    /// Classify a non-negative BAC percentage into its severity tier
    pub fn classify(bac: f64) -> StatusLevel {
        if bac < 0.02 {
            StatusLevel::Normal
        } else if bac < 0.05 {
            StatusLevel::Mild
        } else if bac < 0.10 {
            StatusLevel::Moderate
        } else if bac < 0.20 {
            StatusLevel::High
        } else {
            StatusLevel::Severe
        }
    }

    /// Short human-readable description of the tier
    pub fn label(&self) -> &'static str {
        match self {
            StatusLevel::Normal => "normal",
            StatusLevel::Mild => "mildly impaired",
            StatusLevel::Moderate => "reduced attention",
            StatusLevel::High => "clearly intoxicated",
            StatusLevel::Severe => "severely intoxicated",
        }
    }

    /// Display icon for the tier
    pub fn icon(&self) -> &'static str {
        match self {
            StatusLevel::Normal => "🙂",
            StatusLevel::Mild => "😐",
            StatusLevel::Moderate => "😵‍💫",
            StatusLevel::High => "😵",
            StatusLevel::Severe => "💀",
        }
    }
}

/// Result of one BAC evaluation
///
/// Derived fresh on every call, never stored by the engine.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BacResult {
    pub value: f64,
    pub status: StatusLevel,
}
