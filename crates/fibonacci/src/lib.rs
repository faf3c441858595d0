//! Fibonacci numbers computed two ways: plain recursion and an explicit
//! stack that unrolls the same recursion tree without using the host call
//! stack.
//!
//! # Example
//!
//! ```
//! use fibonacci_rs::{fib_naive, fib_stack};
//!
//! assert_eq!(fib_naive(10), 55);
//! assert_eq!(fib_stack(10), 55);
//! ```
//!
//! Both functions take `u64`, so negative indices cannot be expressed.
//! Values past F(93) do not fit in a `u64`; reaching them with either
//! exponential method is impractical anyway.

pub mod fibonacci;
pub mod method;
pub mod stack;

pub use fibonacci::{fib_naive, fib_stack, fib_stack_traced, StackRun, StackStats};
pub use method::{FibError, Method};
pub use stack::CallStack;
