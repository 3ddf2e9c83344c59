use crate::error::Result;
use dotenv::dotenv;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Configuration for the surface plotter
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path of the three-column (spot, maturity, price) input table
    pub input_path: PathBuf,
    /// Path the rendered PNG is written to
    pub output_path: PathBuf,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// With nothing set, the tool reads `fdm.csv` and writes `plot.png` in
    /// the working directory, matching the solver's output conventions.
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Default values
        let default_input = "fdm.csv".to_string();
        let default_output = "plot.png".to_string();
        let default_log_level = "info".to_string();

        let input_path = env::var("FDM_PLOT_INPUT").unwrap_or(default_input).into();
        let output_path = env::var("FDM_PLOT_OUTPUT").unwrap_or(default_output).into();
        let log_level = env::var("LOG_LEVEL").unwrap_or(default_log_level);

        Ok(Config {
            input_path,
            output_path,
            log_level,
        })
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self) -> Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests run in parallel but env vars are process-global; every test that
    // reads or writes them must hold this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn env_variables_override_default_paths() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        env::remove_var("FDM_PLOT_INPUT");
        env::remove_var("FDM_PLOT_OUTPUT");

        let config = Config::from_env().unwrap();
        assert_eq!(config.input_path, PathBuf::from("fdm.csv"));
        assert_eq!(config.output_path, PathBuf::from("plot.png"));

        env::set_var("FDM_PLOT_INPUT", "data/run7.csv");
        env::set_var("FDM_PLOT_OUTPUT", "out/run7.png");

        let config = Config::from_env().unwrap();
        assert_eq!(config.input_path, PathBuf::from("data/run7.csv"));
        assert_eq!(config.output_path, PathBuf::from("out/run7.png"));

        env::remove_var("FDM_PLOT_INPUT");
        env::remove_var("FDM_PLOT_OUTPUT");
    }
}
