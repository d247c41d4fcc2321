//! One profiler per worker thread, merged into a single view afterwards.
//!
//! A profiler serves exactly one execution flow, so parallel work gives each
//! worker its own instance. The finished `Report`s are plain data: they cross
//! the channel back to the coordinator, which merges and prints them.
//!
//! Run with: `cargo run --example scope_time_worker_merge`.

use std::hint::black_box;
use std::sync::mpsc;
use std::thread;

use scope_time::{Profiler, Report};

fn main() {
    let (sender, receiver) = mpsc::channel();

    let workers: Vec<_> = (0..4_u64)
        .map(|worker| {
            let sender = sender.clone();
            thread::spawn(move || {
                let profiler = Profiler::new();

                for _ in 0..10 {
                    profiler.scope(format!("worker_{worker}")).time(|| {
                        let mut sum = 0_u64;
                        for i in 0..100_000_u64 {
                            sum = sum.wrapping_add(i.wrapping_mul(worker.wrapping_add(1)));
                        }
                        black_box(sum);
                    });
                }

                sender.send(profiler.report()).unwrap();
            })
        })
        .collect();
    drop(sender);

    let merged = receiver
        .iter()
        .reduce(|a, b| Report::merge(&a, &b))
        .expect("every worker sends exactly one report");

    for worker in workers {
        worker.join().unwrap();
    }

    merged.print_to_stdout();
}
