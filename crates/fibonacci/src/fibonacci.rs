use serde::Serialize;
use tracing::debug;

use crate::stack::CallStack;

/// Computes the nth Fibonacci number by direct recursion.
///
/// Fibonacci sequence: 0, 1, 1, 2, 3, 5, 8, 13, 21, ...
/// Runs in exponential time and recurses `n` frames deep on the host stack.
///
/// # Arguments
///
/// * `n` - The index (0-based) of the Fibonacci number to compute
///
/// # Examples
///
/// ```
/// use fibonacci_rs::fibonacci::fib_naive;
///
/// assert_eq!(fib_naive(0), 0);
/// assert_eq!(fib_naive(1), 1);
/// assert_eq!(fib_naive(10), 55);
/// ```
pub fn fib_naive(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }

    fib_naive(n - 1) + fib_naive(n - 2)
}

/// Computes the nth Fibonacci number by unrolling the naive recursion onto
/// an explicit [`CallStack`].
///
/// Every pending subproblem is pushed instead of called. Base cases (0 and 1)
/// are added straight to the running total. The recursion tree is walked
/// node for node, so the cost is still exponential; only the host stack
/// depth goes away.
///
/// `n - 1` is pushed before `n - 2`, which means `n - 2` is popped first.
///
/// # Examples
///
/// ```
/// use fibonacci_rs::fibonacci::fib_stack;
///
/// assert_eq!(fib_stack(0), 0);
/// assert_eq!(fib_stack(1), 1);
/// assert_eq!(fib_stack(10), 55);
/// ```
pub fn fib_stack(n: u64) -> u64 {
    let mut result: u64 = 0;
    let mut stack = CallStack::with_root(n);

    while let Some(value) = stack.pop() {
        if value <= 1 {
            result += value;
        } else {
            stack.push(value - 1);
            stack.push(value - 2);
        }
    }

    result
}

/// Counters collected while unrolling one call of [`fib_stack_traced`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StackStats {
    /// Subproblems taken off the stack; one per node of the recursion tree.
    pub pops: u64,
    pub pushes: u64,
    pub peak_depth: usize,
    /// Backing slots allocated by the end of the run.
    pub slots: usize,
}

/// The value computed by [`fib_stack_traced`] together with its counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StackRun {
    pub value: u64,
    pub stats: StackStats,
}

/// Same algorithm as [`fib_stack`], also recording how the stack was used.
///
/// ```
/// use fibonacci_rs::fib_stack_traced;
///
/// let run = fib_stack_traced(5);
/// assert_eq!(run.value, 5);
/// assert_eq!(run.stats.pops, 15);
/// ```
pub fn fib_stack_traced(n: u64) -> StackRun {
    let mut result: u64 = 0;
    let mut stack = CallStack::with_root(n);
    let mut stats = StackStats {
        peak_depth: stack.depth(),
        ..StackStats::default()
    };

    while let Some(value) = stack.pop() {
        stats.pops += 1;
        if value <= 1 {
            result += value;
        } else {
            stack.push(value - 1);
            stack.push(value - 2);
            stats.pushes += 2;
            stats.peak_depth = stats.peak_depth.max(stack.depth());
        }
    }
    stats.slots = stack.capacity();

    debug!(
        "Unrolled fib_stack({}): {} pops, {} pushes, peak depth {}",
        n, stats.pops, stats.pushes, stats.peak_depth
    );

    StackRun {
        value: result,
        stats,
    }
}
