//! BAC estimation engine based on the Widmark formula.
//!
//! Every function here is a pure function of its inputs: no clock access,
//! no shared mutable state. The observation instant is always passed in
//! explicitly, so identical inputs always produce identical output.
//!
//! Aggregation policy: each drink's contribution decays independently from
//! its own timestamp and is clamped at zero before summation. The total is
//! therefore associative and order-independent.

use crate::catalog::abv_percent_for;
use crate::types::{BacResult, DrinkEvent, Profile, Sex, StatusLevel};
use chrono::{DateTime, Utc};

/// Density of ethanol in g/ml
pub const ALCOHOL_DENSITY: f64 = 0.789;

/// Metabolic elimination rate in BAC percent per hour, assumed linear
pub const METABOLISM_RATE: f64 = 0.015;

/// Widmark body-water distribution ratio for a given sex
///
/// Male 0.68, female 0.55; unspecified defaults to the male ratio.
pub fn distribution_ratio(sex: Sex) -> f64 {
    match sex {
        Sex::Male | Sex::Unspecified => 0.68,
        Sex::Female => 0.55,
    }
}

/// Grams of pure ethanol in a drink
///
/// `volume_ml >= 0`, `abv_percent` in `[0, 100]`. Zero volume yields zero
/// grams; there are no error conditions.
pub fn alcohol_grams(volume_ml: f64, abv_percent: f64) -> f64 {
    volume_ml * (abv_percent / 100.0) * ALCOHOL_DENSITY
}

/// BAC contribution of one alcohol mass after metabolic decay
///
/// Widmark: `initial = (grams / (weight_kg * r * 1000)) * 100`, then linear
/// decay of [`METABOLISM_RATE`] per elapsed hour. Non-positive weight yields
/// zero (no division by non-positive mass), negative elapsed time is floored
/// to zero (decay never runs backward), and an over-decayed result is
/// clamped to zero.
pub fn bac_contribution(alcohol_grams: f64, weight_kg: f64, sex: Sex, elapsed_hours: f64) -> f64 {
    if weight_kg <= 0.0 {
        return 0.0;
    }

    let r = distribution_ratio(sex);
    let elapsed = elapsed_hours.max(0.0);

    let initial = (alcohol_grams / (weight_kg * r * 1000.0)) * 100.0;
    let current = initial - METABOLISM_RATE * elapsed;
    current.max(0.0)
}

/// Hours elapsed from a drink to the observation instant, floored at zero
fn elapsed_hours(occurred_at: DateTime<Utc>, observation: DateTime<Utc>) -> f64 {
    let millis = (observation - occurred_at).num_milliseconds();
    (millis as f64 / 3_600_000.0).max(0.0)
}

/// Current total BAC for a set of drinks at an observation instant
///
/// Contributions are computed independently per drink, each decayed from
/// its own `occurred_at` and clamped at zero, then summed. Drinks with no
/// recorded volume contribute zero. An empty list yields zero.
pub fn total_bac(drinks: &[DrinkEvent], profile: &Profile, observation: DateTime<Utc>) -> f64 {
    drinks
        .iter()
        .map(|drink| {
            let volume_ml = match drink.volume_ml {
                Some(v) => v,
                None => return 0.0,
            };

            let abv = abv_percent_for(drink.beverage_type);
            let grams = alcohol_grams(volume_ml, abv);
            let hours = elapsed_hours(drink.occurred_at, observation);

            bac_contribution(grams, profile.weight_kg, profile.sex, hours)
        })
        .sum()
}

/// Evaluate current BAC and its severity tier
///
/// The single entry point callers normally use: aggregates the drink list
/// and classifies the result.
pub fn evaluate(drinks: &[DrinkEvent], profile: &Profile, observation: DateTime<Utc>) -> BacResult {
    let value = total_bac(drinks, profile, observation);
    let status = StatusLevel::classify(value);

    tracing::debug!(
        bac = value,
        status = ?status,
        drinks = drinks.len(),
        "evaluated BAC"
    );

    BacResult { value, status }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BeverageType;
    use chrono::Duration;
    use uuid::Uuid;

    const EPSILON: f64 = 1e-9;

    fn drink(
        volume_ml: Option<f64>,
        beverage_type: Option<BeverageType>,
        occurred_at: DateTime<Utc>,
    ) -> DrinkEvent {
        DrinkEvent {
            id: Uuid::new_v4(),
            volume_ml,
            beverage_type,
            occurred_at,
        }
    }

    fn male_60kg() -> Profile {
        Profile {
            weight_kg: 60.0,
            sex: Sex::Male,
        }
    }

    #[test]
    fn test_alcohol_grams_beer() {
        // 500ml of 5% beer: 500 * 0.05 * 0.789 = 19.725g
        let grams = alcohol_grams(500.0, 5.0);
        assert!((grams - 19.725).abs() < EPSILON);
    }

    #[test]
    fn test_alcohol_grams_zero_volume() {
        assert_eq!(alcohol_grams(0.0, 40.0), 0.0);
    }

    #[test]
    fn test_contribution_fresh_drink() {
        // Scenario: 19.725g, 60kg male, no decay
        // (19.725 / (60 * 0.68 * 1000)) * 100 ≈ 0.0483%
        let bac = bac_contribution(19.725, 60.0, Sex::Male, 0.0);
        assert!((bac - 0.048345588235294115).abs() < 1e-12);
        assert_eq!(StatusLevel::classify(bac), StatusLevel::Mild);
    }

    #[test]
    fn test_contribution_fully_decayed_clamps_to_zero() {
        // 0.0483 - 0.015 * 4 = -0.0117, clamped to 0
        let bac = bac_contribution(19.725, 60.0, Sex::Male, 4.0);
        assert_eq!(bac, 0.0);
        assert_eq!(StatusLevel::classify(bac), StatusLevel::Normal);
    }

    #[test]
    fn test_contribution_female_ratio() {
        let male = bac_contribution(19.725, 60.0, Sex::Male, 0.0);
        let female = bac_contribution(19.725, 60.0, Sex::Female, 0.0);
        let unspecified = bac_contribution(19.725, 60.0, Sex::Unspecified, 0.0);

        assert!(female > male);
        assert_eq!(unspecified, male);
    }

    #[test]
    fn test_contribution_non_positive_weight() {
        assert_eq!(bac_contribution(19.725, 0.0, Sex::Male, 0.0), 0.0);
        assert_eq!(bac_contribution(19.725, -70.0, Sex::Male, 0.0), 0.0);
    }

    #[test]
    fn test_contribution_negative_elapsed_floored() {
        let now = bac_contribution(19.725, 60.0, Sex::Male, 0.0);
        let future = bac_contribution(19.725, 60.0, Sex::Male, -2.0);
        // Decay never runs backward and never inflates the estimate
        assert_eq!(future, now);
    }

    #[test]
    fn test_contribution_monotonic_decay() {
        let mut previous = f64::INFINITY;
        for hours in 0..12 {
            let bac = bac_contribution(19.725, 60.0, Sex::Male, hours as f64);
            assert!(bac <= previous);
            assert!(bac >= 0.0);
            previous = bac;
        }
        // Once zero, stays zero
        assert_eq!(bac_contribution(19.725, 60.0, Sex::Male, 24.0), 0.0);
    }

    #[test]
    fn test_total_bac_empty_list() {
        let observation = Utc::now();
        assert_eq!(total_bac(&[], &male_60kg(), observation), 0.0);

        let result = evaluate(&[], &male_60kg(), observation);
        assert_eq!(result.value, 0.0);
        assert_eq!(result.status, StatusLevel::Normal);
    }

    #[test]
    fn test_total_bac_two_drinks_decay_independently() {
        // One beer now, one beer two hours ago:
        // 0.0483 + (0.0483 - 0.030) ≈ 0.0666 → moderate
        let observation = Utc::now();
        let drinks = vec![
            drink(Some(500.0), Some(BeverageType::Beer), observation),
            drink(
                Some(500.0),
                Some(BeverageType::Beer),
                observation - Duration::hours(2),
            ),
        ];

        let total = total_bac(&drinks, &male_60kg(), observation);
        let expected = 0.048345588235294115 + (0.048345588235294115 - 0.03);
        assert!((total - expected).abs() < 1e-9);

        let result = evaluate(&drinks, &male_60kg(), observation);
        assert_eq!(result.status, StatusLevel::Moderate);
    }

    #[test]
    fn test_total_bac_order_independent() {
        let observation = Utc::now();
        let mut drinks = vec![
            drink(Some(500.0), Some(BeverageType::Beer), observation),
            drink(
                Some(180.0),
                Some(BeverageType::Sake),
                observation - Duration::minutes(45),
            ),
            drink(
                Some(60.0),
                Some(BeverageType::Whiskey),
                observation - Duration::hours(3),
            ),
        ];

        let forward = total_bac(&drinks, &male_60kg(), observation);
        drinks.reverse();
        let reversed = total_bac(&drinks, &male_60kg(), observation);
        drinks.swap(0, 1);
        let swapped = total_bac(&drinks, &male_60kg(), observation);

        assert!((forward - reversed).abs() < EPSILON);
        assert!((forward - swapped).abs() < EPSILON);
    }

    #[test]
    fn test_total_bac_unspecified_volume_contributes_nothing() {
        let observation = Utc::now();
        let baseline = vec![drink(Some(500.0), Some(BeverageType::Beer), observation)];
        let with_unknown = vec![
            drink(Some(500.0), Some(BeverageType::Beer), observation),
            drink(None, Some(BeverageType::Whiskey), observation),
            drink(Some(0.0), Some(BeverageType::Shochu), observation),
        ];

        let a = total_bac(&baseline, &male_60kg(), observation);
        let b = total_bac(&with_unknown, &male_60kg(), observation);
        assert!((a - b).abs() < EPSILON);
    }

    #[test]
    fn test_total_bac_missing_beverage_type_uses_other() {
        let observation = Utc::now();
        let untyped = vec![drink(Some(500.0), None, observation)];
        let other = vec![drink(Some(500.0), Some(BeverageType::Other), observation)];

        let a = total_bac(&untyped, &male_60kg(), observation);
        let b = total_bac(&other, &male_60kg(), observation);
        assert!((a - b).abs() < EPSILON);
        assert!(a > 0.0);
    }

    #[test]
    fn test_total_bac_never_negative() {
        let observation = Utc::now();
        let drinks = vec![
            drink(
                Some(100.0),
                Some(BeverageType::Beer),
                observation - Duration::hours(30),
            ),
            drink(
                Some(50.0),
                Some(BeverageType::Wine),
                observation - Duration::hours(48),
            ),
        ];

        let total = total_bac(&drinks, &male_60kg(), observation);
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_future_drink_counts_as_undegraded() {
        // A drink timestamped after the observation instant contributes its
        // full initial BAC, never more
        let observation = Utc::now();
        let future = vec![drink(
            Some(500.0),
            Some(BeverageType::Beer),
            observation + Duration::hours(1),
        )];
        let present = vec![drink(Some(500.0), Some(BeverageType::Beer), observation)];

        let a = total_bac(&future, &male_60kg(), observation);
        let b = total_bac(&present, &male_60kg(), observation);
        assert!((a - b).abs() < EPSILON);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let observation = Utc::now();
        let drinks = vec![drink(
            Some(350.0),
            Some(BeverageType::Cocktail),
            observation - Duration::minutes(30),
        )];
        let profile = Profile {
            weight_kg: 55.0,
            sex: Sex::Female,
        };

        let first = evaluate(&drinks, &profile, observation);
        let second = evaluate(&drinks, &profile, observation);
        assert_eq!(first.value, second.value);
        assert_eq!(first.status, second.status);
    }
}
