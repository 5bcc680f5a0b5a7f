use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::waiter::WaitSettings;


const EXAMPLES: &str = "\
Examples:
  portwait db:5432
  portwait --timeout 30 --retry-interval 2 db:5432,cache:6379
  WAIT=db:5432,cache:6379 portwait --format json";


/// Block until every host:port target accepts a TCP connection, or give up
/// once the timeout has passed.
#[derive(Debug, Parser)]
#[command(author, version, about, after_help = EXAMPLES)]
pub struct Args {
    /// Comma separated host:port pairs
    #[arg(value_name = "TARGETS", env = "WAIT", hide_env_values = true)]
    pub targets: Option<String>,

    /// Overall wait budget in seconds
    #[arg(long, default_value_t = 15, allow_negative_numbers = true)]
    pub timeout: i64,

    /// Pause between sweeps in seconds
    #[arg(long, default_value_t = 1)]
    pub retry_interval: u64,

    /// Only report warnings and errors
    #[arg(long)]
    pub quiet: bool,

    /// Report every probe
    #[arg(long)]
    pub debug: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub format: LogFormat,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}


impl Args {
    /// The target list after positional/env resolution; blank input counts as absent.
    pub fn targets(&self) -> Option<&str> {
        self.targets
            .as_deref()
            .filter(|targets| !targets.trim().is_empty())
    }

    pub fn wait_settings(&self) -> WaitSettings {
        WaitSettings {
            timeout: Duration::from_secs(self.timeout.max(0).unsigned_abs()),
            retry_interval: Duration::from_secs(self.retry_interval),
        }
    }
}
