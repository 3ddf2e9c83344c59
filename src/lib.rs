//! # fdm-plot
//!
//! Renders a 3D option-price surface from the tabular output of a
//! finite-difference Black-Scholes solver.
//!
//! ## Features
//!
//! - Loads three-column (spot, maturity, price) tables with comma, tab, or
//!   whitespace delimiters
//! - Reshapes the columns into square grids and validates their congruence
//! - Plots the price surface with a viridis color map, black cell edges,
//!   and a fixed [0, 1] price axis
//! - Writes the figure to a PNG file
//! - Environment-based configuration
//!
//! ## Example
//!
//! ```rust,no_run
//! use fdm_plot::config::Config;
//! use fdm_plot::models::PriceSurface;
//! use fdm_plot::utils::{load_surface_points, plot_price_surface};
//!
//! fn main() -> fdm_plot::error::Result<()> {
//!     // Load configuration from environment
//!     let config = Config::from_env()?;
//!     config.init_logging()?;
//!
//!     // Read solver output and reshape it into grids
//!     let (spots, maturities, prices) = load_surface_points(&config.input_path)?;
//!     let surface = PriceSurface::from_columns(spots, maturities, prices)?;
//!
//!     // Render and save the surface plot
//!     plot_price_surface(&surface, &config.output_path)?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SurfaceError};
pub use models::PriceSurface;
pub use utils::{load_surface_points, plot_price_surface};
