use std::time::Duration;

use clap::Parser;

use crate::api::ControlAction;

/// Configuration parsed from command-line arguments.
#[derive(Debug, Parser, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Base URL of the player service
    #[arg(short = 'u', long = "url", default_value = "http://localhost:5000")]
    pub url: String,
    /// Poll cadence in milliseconds
    #[arg(short = 'i', long = "interval", default_value_t = 1000)]
    pub interval_ms: u64,
    /// Send a transport command instead of running the poll loop
    #[arg(value_enum)]
    pub action: Option<ControlAction>,
}

impl Config {
    /// Parse arguments and clamp derived fields.
    pub fn parse() -> Self {
        let mut config = <Self as Parser>::parse();
        // A zero cadence would spin; hold it to something sane.
        config.interval_ms = config.interval_ms.max(100);
        config
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
