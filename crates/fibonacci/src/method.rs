//! Selecting an algorithm by name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::fibonacci::{fib_naive, fib_stack};

/// Errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FibError {
    /// The name does not match any known method.
    #[error("Unknown method '{0}' (expected 'naive' or 'stack')")]
    UnknownMethod(String),
}

/// The two ways of computing a Fibonacci number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Direct recursion, see [`fib_naive`].
    Naive,
    /// Explicit stack unrolling, see [`fib_stack`].
    Stack,
}

impl Method {
    /// Every method, in the order they are reported.
    pub const ALL: [Method; 2] = [Method::Naive, Method::Stack];

    pub fn compute(self, n: u64) -> u64 {
        match self {
            Method::Naive => fib_naive(n),
            Method::Stack => fib_stack(n),
        }
    }

    /// Function name shown next to results, e.g. `fib_stack(30) = 832040`.
    pub fn label(self) -> &'static str {
        match self {
            Method::Naive => "fib",
            Method::Stack => "fib_stack",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Naive => "naive",
            Method::Stack => "stack",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" | "recursive" => Ok(Method::Naive),
            "stack" | "iterative" => Ok(Method::Stack),
            _ => Err(FibError::UnknownMethod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("naive".parse::<Method>(), Ok(Method::Naive));
        assert_eq!("Recursive".parse::<Method>(), Ok(Method::Naive));
        assert_eq!(" STACK ".parse::<Method>(), Ok(Method::Stack));
        assert_eq!("iterative".parse::<Method>(), Ok(Method::Stack));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "memo".parse::<Method>().unwrap_err();
        assert_eq!(err, FibError::UnknownMethod("memo".to_string()));
        assert_eq!(
            err.to_string(),
            "Unknown method 'memo' (expected 'naive' or 'stack')"
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for method in Method::ALL {
            assert_eq!(method.to_string().parse::<Method>(), Ok(method));
        }
    }

    #[test]
    fn test_compute_dispatch() {
        assert_eq!(Method::Naive.compute(12), 144);
        assert_eq!(Method::Stack.compute(12), 144);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Method::Naive.label(), "fib");
        assert_eq!(Method::Stack.label(), "fib_stack");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Method::ALL).unwrap();
        assert_eq!(json, r#"["naive","stack"]"#);
        let parsed: Vec<Method> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Method::ALL.to_vec());
    }
}
