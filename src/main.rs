// src/main.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use column_grid::{GridConfig, House, LayoutGrid};

/// Runs the column grid demo scenarios and prints each grid state.
#[derive(Parser, Debug)]
#[command(name = "column-grid", version)]
struct Args {
    /// TOML file with `max_span` and `min_span`.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    max_span: Option<f64>,

    #[arg(long)]
    min_span: Option<f64>,

    #[arg(long, default_value_t = 10.0)]
    house_width: f64,

    #[arg(long, default_value_t = 8.0)]
    house_depth: f64,
}

const SEPARATOR: &str = "====================================================";

fn load_config(args: &Args) -> anyhow::Result<GridConfig> {
    let base = match &args.config {
        Some(path) => GridConfig::load(path)?,
        None => GridConfig::default(),
    };
    base.with_overrides(args.max_span, args.min_span)
        .context("invalid span override")
}

fn run_grid_scenario(config: GridConfig) {
    let mut grid = LayoutGrid::new(config);

    println!("1. Initial columns");
    for x in [0.0, 2.5, 5.0, 7.5] {
        grid.add_element(x, 0.0);
    }
    print!("{}", grid.status());
    println!("{SEPARATOR}");

    println!("2. Column added too close to a neighbour");
    grid.add_element(3.5, 0.0);
    print!("{}", grid.status());
    println!("{SEPARATOR}");

    println!("3. Hiding a column widens the span");
    grid.hide_element(3);
    print!("{}", grid.status());
    println!("{SEPARATOR}");

    println!("4. Hiding an unknown column");
    grid.hide_element(999);
    print!("{}", grid.status());
    println!("{SEPARATOR}");

    println!("5. Column added beyond the max span");
    grid.add_element(20.0, 0.0);
    print!("{}", grid.status());
    println!("{SEPARATOR}");
}

fn run_house_scenario(config: GridConfig, width: f64, depth: f64) {
    let mut house = House::new(width, depth, config);
    house.place_anchors();
    house.add_column(1.0, 1.0);
    house.hide_column(1);
    print!("{}", house.status());

    let placements: Vec<_> = house
        .grid()
        .visible_elements()
        .iter()
        .map(|column| column.world_translation())
        .collect();
    log::debug!("visible placements: {:?}", placements);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args)?;
    log::info!(
        "grid spans: max {}m, min {}m",
        config.max_span(),
        config.min_span()
    );

    run_grid_scenario(config);
    run_house_scenario(config, args.house_width, args.house_depth);
    Ok(())
}
