use bac_core::*;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bactrack")]
#[command(about = "Blood alcohol concentration estimator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate current BAC from a drink log (default)
    Eval {
        /// Path to the drink log (.jsonl or .csv)
        #[arg(long)]
        drinks: Option<PathBuf>,

        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: Option<f64>,

        /// Sex for the distribution ratio (male, female)
        #[arg(long)]
        sex: Option<String>,

        /// Observation instant, RFC3339 (defaults to now)
        #[arg(long)]
        at: Option<String>,
    },

    /// Print the beverage catalog
    Catalog,
}

fn main() -> Result<()> {
    // Initialize logging
    bac_core::logging::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Eval {
            drinks,
            weight_kg,
            sex,
            at,
        }) => cmd_eval(drinks, weight_kg, sex, at),
        Some(Commands::Catalog) => cmd_catalog(),
        None => {
            // Default to "eval" command
            cmd_eval(None, None, None, None)
        }
    }
}

fn cmd_eval(
    drinks_path: Option<PathBuf>,
    weight_kg: Option<f64>,
    sex: Option<String>,
    at: Option<String>,
) -> Result<()> {
    let config = Config::load()?;

    let drinks_path = drinks_path.unwrap_or_else(|| config.data.drinks_path.clone());
    let drinks = load_drinks(&drinks_path)?;

    let sex = match sex {
        Some(s) => parse_sex(&s)?,
        None => config.profile.sex,
    };
    let profile = Profile {
        weight_kg: weight_kg.unwrap_or(config.profile.weight_kg),
        sex,
    };

    let observation = match at {
        Some(s) => DateTime::parse_from_rfc3339(&s)
            .map_err(|e| Error::Other(format!("Invalid --at instant: {}", e)))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    tracing::info!(
        "Evaluating {} drinks for {}kg profile at {}",
        drinks.len(),
        profile.weight_kg,
        observation
    );

    let result = evaluate(&drinks, &profile, observation);

    // Drink counting is a caller-side metric; only drinks with a recorded
    // volume enter the alcohol-mass sum
    let with_volume = drinks.iter().filter(|d| d.volume_ml.is_some()).count();

    println!("Drinks considered: {} ({} with recorded volume)", drinks.len(), with_volume);
    println!("Estimated BAC: {:.4}%", result.value);
    println!("Status: {} {}", result.status.label(), result.status.icon());

    Ok(())
}

fn cmd_catalog() -> Result<()> {
    println!("{:<10} {:<10} {:>6}", "type", "name", "abv%");
    let mut entries: Vec<_> = beverages().iter().collect();
    entries.sort_by(|a, b| {
        a.1.abv_percent
            .partial_cmp(&b.1.abv_percent)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (bt, beverage) in entries {
        println!(
            "{:<10} {:<10} {:>6.1}",
            format!("{:?}", bt).to_lowercase(),
            beverage.name,
            beverage.abv_percent
        );
    }
    Ok(())
}

fn parse_sex(s: &str) -> Result<Sex> {
    match s.to_lowercase().as_str() {
        "male" => Ok(Sex::Male),
        "female" => Ok(Sex::Female),
        "unspecified" => Ok(Sex::Unspecified),
        other => Err(Error::Other(format!(
            "Unknown sex '{}' (expected male, female, or unspecified)",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sex() {
        assert_eq!(parse_sex("male").unwrap(), Sex::Male);
        assert_eq!(parse_sex("FEMALE").unwrap(), Sex::Female);
        assert_eq!(parse_sex("unspecified").unwrap(), Sex::Unspecified);
        assert!(parse_sex("robot").is_err());
    }
}
