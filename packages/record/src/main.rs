#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the meteorite record cleansing tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use meteorite_map_cli_utils::{read_json, write_json_pretty};
use meteorite_map_record::{aggregate_years, normalize_records};
use meteorite_map_record_models::Record;

#[derive(Parser)]
#[command(name = "meteorite_map_record", about = "Meteorite record cleansing tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove entries without a valid latitude, longitude or weight, convert
    /// weights to grams and collection dates to years
    Cleanse {
        /// Path to the input JSON record array
        input_file: PathBuf,
        /// Path to save the cleansed JSON file
        output_file: PathBuf,
    },
    /// Count cleansed records per collection year
    Years {
        /// Path to a cleansed JSON record array
        input_file: PathBuf,
        /// Path to save the year histogram
        output_file: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    meteorite_map_cli_utils::init_logger();
    let cli = Cli::parse();

    match cli.command {
        Commands::Cleanse {
            input_file,
            output_file,
        } => {
            let records: Vec<serde_json::Value> = read_json(&input_file)?;
            let cleansed = normalize_records(records);
            write_json_pretty(&output_file, &cleansed)?;
            println!("Cleansed data saved to: {}", output_file.display());
        }
        Commands::Years {
            input_file,
            output_file,
        } => {
            let records: Vec<Record> = read_json(&input_file)?;
            let years = aggregate_years(&records);
            write_json_pretty(&output_file, &years)?;
            println!("Year histogram saved to: {}", output_file.display());
        }
    }

    Ok(())
}
