use fibonacci_rs::{fib_naive, fib_stack, fib_stack_traced};

fn main() {
    println!("Fibonacci sequence (first 10 numbers):");
    for i in 0..10 {
        println!("fib({}) = {}  fib_stack({}) = {}", i, fib_naive(i), i, fib_stack(i));
    }

    println!("\nstack usage:");
    for n in [10, 20, 30] {
        let run = fib_stack_traced(n);
        println!(
            "fib_stack({}) = {} ({} pops, peak depth {})",
            n, run.value, run.stats.pops, run.stats.peak_depth
        );
    }
}
