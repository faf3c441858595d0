//! Wall-clock timing of a single method.

use anyhow::{bail, ensure, Result};
use fibonacci_rs::{fib_stack_traced, Method, StackStats};
use serde::Serialize;
use std::hint::black_box;
use std::time::Instant;
use tracing::debug;

/// Result and timing of one method over one or more runs.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub method: Method,
    pub label: &'static str,
    pub value: u64,
    pub runs: u32,
    pub total_ms: f64,
    pub mean_ms: f64,
    /// Stack usage of one untimed extra run, stack method only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_stats: Option<StackStats>,
}

/// Runs `method` on `n` `runs` times, timing each call.
///
/// Every run must produce the same value. With `trace_stack` set, the stack
/// method is run once more outside the timed loop to collect [`StackStats`].
pub fn measure(method: Method, n: u64, runs: u32, trace_stack: bool) -> Result<Measurement> {
    ensure!(runs >= 1, "runs must be at least 1");

    let mut value = None;
    let mut total_ms = 0.0;

    for run in 1..=runs {
        let start = Instant::now();
        let result = method.compute(black_box(n));
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        total_ms += elapsed_ms;

        debug!("{}({}) run {}/{}: {:.3}ms", method.label(), n, run, runs, elapsed_ms);

        match value {
            None => value = Some(result),
            Some(previous) if previous != result => bail!(
                "{}({}) returned {} on run {} but {} before",
                method.label(),
                n,
                result,
                run,
                previous
            ),
            Some(_) => {}
        }
    }

    let Some(value) = value else {
        bail!("no runs were made for {}({})", method.label(), n);
    };

    let stack_stats = match method {
        Method::Stack if trace_stack => Some(fib_stack_traced(n).stats),
        _ => None,
    };

    Ok(Measurement {
        method,
        label: method.label(),
        value,
        runs,
        total_ms,
        mean_ms: total_ms / f64::from(runs),
        stack_stats,
    })
}
