//! Nested scopes: a small pipeline profiled per stage.
//!
//! Each iteration opens a `request` span; the stages inside it become nested
//! report entries with their own per-level percentages.
//!
//! Run with: `cargo run --example scope_time_nested`.
#![expect(
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    reason = "this is example code that does not need production-level safety"
)]

use std::hint::black_box;

use scope_time::Profiler;

fn main() {
    let profiler = Profiler::new();

    for request in 0..25_u32 {
        let _span = profiler.scope("request").measure();

        let payload = profiler.scope("decode").time(|| {
            let mut bytes = Vec::with_capacity(4096);
            for i in 0..4096_u32 {
                bytes.push(((i * 31 + request) % 251) as u8);
            }
            bytes
        });

        let digest = profiler.scope("process").time(|| {
            let mut digest = 0_u64;
            for &byte in &payload {
                digest = digest.wrapping_mul(31).wrapping_add(u64::from(byte));
            }
            digest
        });

        profiler.scope("respond").time(|| {
            black_box(format!("request {request} -> {digest:x}"));
        });
    }

    assert!(profiler.is_settled());
    profiler.print_to_stdout();
}
