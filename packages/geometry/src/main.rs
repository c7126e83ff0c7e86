#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the `GeoJSON` polygon filter.

use std::path::PathBuf;

use clap::Parser;
use meteorite_map_cli_utils::{read_json, write_json_pretty};
use meteorite_map_geometry::{filter_min_points_with_summary, rewind};
use meteorite_map_geometry_models::RawFeatureCollection;

#[derive(Parser)]
#[command(
    name = "meteorite_map_geometry",
    about = "Drop polygons with too few boundary points from a GeoJSON feature collection"
)]
struct Cli {
    /// Input `GeoJSON` feature collection
    input: PathBuf,
    /// Where to write the filtered feature collection
    output: PathBuf,
    /// Minimum number of positions an outer ring needs to be kept
    #[arg(long, default_value = "10")]
    min_points: usize,
    /// Rewind rings to the right-hand rule (outer rings counter-clockwise)
    #[arg(long)]
    rewind: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    meteorite_map_cli_utils::init_logger();
    let cli = Cli::parse();

    let collection: RawFeatureCollection = read_json(&cli.input)?;
    let (mut simplified, summary) = filter_min_points_with_summary(collection, cli.min_points)?;

    if cli.rewind {
        rewind(&mut simplified);
    }

    write_json_pretty(&cli.output, &simplified)?;
    log::info!(
        "Wrote {} features ({} dropped) to {}",
        summary.kept(),
        summary.dropped(),
        cli.output.display()
    );

    Ok(())
}
