//! Command-line arguments.

use clap::Parser;
use fibonacci_rs::Method;
use fibstack_config::{Config, OutputFormat};
use std::path::PathBuf;

/// Time naive and explicit-stack Fibonacci implementations.
#[derive(Debug, Parser)]
#[command(name = "fibstack", version, about)]
pub struct Cli {
    /// Fibonacci index to compute [default: 30]
    pub n: Option<u64>,

    /// Method to run (naive, stack); repeat or comma-separate for several
    #[arg(short, long = "method", value_name = "METHOD", value_delimiter = ',')]
    pub methods: Vec<Method>,

    /// Timed repetitions per method
    #[arg(short, long)]
    pub runs: Option<u32>,

    /// Output format (text, json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Decimal places for millisecond timings
    #[arg(long)]
    pub precision: Option<usize>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Overrides configuration values with any flags that were given.
    pub fn apply(&self, config: &mut Config) {
        if let Some(n) = self.n {
            config.run.n = n;
        }
        if !self.methods.is_empty() {
            config.run.methods = self.methods.clone();
        }
        if let Some(runs) = self.runs {
            config.run.runs = runs;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(precision) = self.precision {
            config.output.precision = precision;
        }
    }
}
