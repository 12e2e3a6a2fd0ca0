use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bikeshare::config::Config;
use bikeshare::shell::Shell;
use bikeshare::units::Unit;
use clap::Parser;

/// Explore US bikeshare trip data for Chicago, New York City and Washington
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Raw rows shown per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Unit for trip durations (seconds, minutes or hours)
    #[arg(long)]
    duration_unit: Option<Unit>,
}

impl Args {
    fn into_config(self) -> Result<Config> {
        let mut config = match self.config {
            Some(ref path) => Config::from_path(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(data_dir) = self.data_dir {
            config.data_dir = data_dir;
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(unit) = self.duration_unit {
            config.duration_unit = unit;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Args::parse().into_config()?;
    log::debug!("Using configuration {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), config)?;
    shell.run()?;

    Ok(())
}
