//! Command-line entry point for fdm-plot
//!
//! Reads a finite-difference solver's (spot, maturity, price) table,
//! reshapes it into square grids, and writes a 3D surface plot as PNG.

use fdm_plot::config::Config;
use fdm_plot::error::Result;
use fdm_plot::models::PriceSurface;
use fdm_plot::utils::{load_surface_points, plot_price_surface};
use tracing::info;

fn run() -> Result<()> {
    let config = Config::from_env()?;
    config.init_logging()?;

    info!("Reading surface points from {:?}", config.input_path);

    let (spots, maturities, prices) = load_surface_points(&config.input_path)?;
    info!("Loaded {} surface points", prices.len());

    let surface = PriceSurface::from_columns(spots, maturities, prices)?;
    info!(
        "Reshaped columns into {}x{} grids",
        surface.side(),
        surface.side()
    );

    plot_price_surface(&surface, &config.output_path)?;
    info!("Surface plot saved to {:?}", config.output_path);

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
