//! Simplified example demonstrating key `scope_time` types working together.
//!
//! This example shows how to use the main types in the `scope_time` package:
//! - `Profiler`: Owns the scope tree and produces reports
//! - `Scope`: Named handle used to bracket or wrap measured work
//!
//! Run with: `cargo run --example scope_time_basic`.

use std::collections::HashMap;
use std::fmt::Write;
use std::hint::black_box;

use scope_time::Profiler;

fn main() {
    println!("=== Wall-Clock Scope Profiling Example ===");
    println!();

    let profiler = Profiler::new();

    // Bracket a block with a span.
    {
        let _span = profiler.scope("string_formatting").measure();
        let mut result = String::new();
        for i in 0..20_000 {
            write!(result, "line {i} with enough text to cause real work. ").unwrap();
        }
        black_box(result);
    }

    // Time a closure and keep its result.
    let map = profiler.scope("hashmap_creation").time(|| {
        let mut map = HashMap::new();
        for i in 0..10_000 {
            map.insert(format!("key{i}"), i);
        }
        map
    });
    black_box(map.len());

    // Repeat a scope: cycles accumulate into one report entry.
    for _ in 0..5 {
        profiler.scope("computation").time(|| {
            let mut sum = 0_u64;
            for j in 0..200_000_u64 {
                sum = sum.wrapping_mul(1_103_515_245).wrapping_add(j);
            }
            black_box(sum);
        });
    }

    profiler.print_to_stdout();
}
