//! CLI for fibstack: computes F(n) with each selected method and reports
//! the wall-clock time each one took.

pub mod bench;
pub mod cli;
pub mod report;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use fibstack_config::{Config, OutputFormat};
use std::io::{self, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub use bench::{measure, Measurement};
pub use cli::Cli;
pub use report::Report;

pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<()> {
    init_logging(cli.verbose)?;

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply(&mut config);
    config.validate()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.print_config {
        write!(out, "{}", config.to_toml()?)?;
        return Ok(());
    }

    execute(&config, &mut out)?;
    Ok(())
}

/// Measures every configured method and writes the rendered report to `out`.
pub fn execute<W: Write>(config: &Config, out: &mut W) -> Result<Report> {
    let n = config.run.n;
    let runs = config.run.runs;
    // Stack statistics only show up in JSON output.
    let trace_stack = config.output.format == OutputFormat::Json;

    info!(
        "Computing fib({}) with {} method(s), {} run(s) each",
        n,
        config.run.methods.len(),
        runs
    );

    let mut measurements = Vec::with_capacity(config.run.methods.len());
    for &method in &config.run.methods {
        let measurement = measure(method, n, runs, trace_stack)
            .with_context(|| format!("Failed to measure {} method", method))?;
        info!(
            "{}({}) = {} in {:.3}ms",
            measurement.label, n, measurement.value, measurement.mean_ms
        );
        measurements.push(measurement);
    }

    let report = Report::new(n, runs, measurements);
    if !report.agree {
        warn!("Methods disagree on fib({})", n);
    }

    writeln!(
        out,
        "{}",
        report.render(config.output.format, config.output.precision)?
    )?;
    Ok(report)
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
