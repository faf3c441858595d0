//! Rendering of timing results.

use anyhow::{Context, Result};
use fibstack_config::OutputFormat;
use serde::Serialize;

use crate::bench::Measurement;

/// Every measurement taken for one `n`.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub n: u64,
    pub runs: u32,
    pub measurements: Vec<Measurement>,
    /// True when every method produced the same value.
    pub agree: bool,
}

impl Report {
    pub fn new(n: u64, runs: u32, measurements: Vec<Measurement>) -> Self {
        let agree = measurements.windows(2).all(|pair| pair[0].value == pair[1].value);
        Self {
            n,
            runs,
            measurements,
            agree,
        }
    }

    pub fn render(&self, format: OutputFormat, precision: usize) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text(precision)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize report")
            }
        }
    }

    /// Two lines per method:
    ///
    /// ```text
    /// fib(30) = 832040
    /// Time: 98.76ms
    /// ```
    fn render_text(&self, precision: usize) -> String {
        let mut lines = Vec::with_capacity(self.measurements.len() * 2);
        for m in &self.measurements {
            lines.push(format!("{}({}) = {}", m.label, self.n, m.value));
            if m.runs > 1 {
                lines.push(format!(
                    "Time: {:.*}ms (mean of {} runs)",
                    precision, m.mean_ms, m.runs
                ));
            } else {
                lines.push(format!("Time: {:.*}ms", precision, m.mean_ms));
            }
        }
        lines.join("\n")
    }
}
