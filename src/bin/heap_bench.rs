//! Interactive benchmark driver for the instrumented max-heap.
//!
//! Presents a small menu on stdin and exercises the public heap API:
//! a basic-operations demo, a wall-clock benchmark over growing input
//! sizes, an increase-key demo, and a CSV table of per-size counter
//! totals. Construction and extraction phases are timed externally with
//! `Instant`; the tracker's own build timer only brackets the bottom-up
//! heapify pass inside `from_vec`.
//!
//! ```bash
//! RUST_LOG=debug cargo run --bin heap-bench
//! ```

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::prelude::*;

use metered_heap::{BinaryMaxHeap, PerfCounters};

const BENCHMARK_SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

fn main() {
    env_logger::init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("=== MaxHeap Benchmark Runner ===");

    loop {
        print_menu();
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                eprintln!("failed to read input: {err}");
                break;
            }
            None => break,
        };

        match line.trim().parse::<u32>() {
            Ok(1) => run_basic_demo(),
            Ok(2) => run_benchmark(),
            Ok(3) => run_increase_key_demo(),
            Ok(4) => generate_csv(),
            Ok(5) => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn print_menu() {
    println!("\n--- Menu ---");
    println!("1. Test basic operations");
    println!("2. Run performance benchmark");
    println!("3. Test increase-key operation");
    println!("4. Generate CSV data");
    println!("5. Exit");
}

fn run_basic_demo() {
    println!("\n--- Basic Operations ---");

    let mut heap = BinaryMaxHeap::with_capacity(10);
    let values = [10, 5, 15, 3, 7, 12, 20];

    println!("Inserting: {values:?}");
    for value in values {
        heap.push(value);
    }

    println!("Heap after insertions: {:?}", heap.as_slice());
    match heap.peek() {
        Ok(max) => println!("Max element: {max}"),
        Err(err) => println!("error: {err}"),
    }

    print!("Extract-max drain:");
    while !heap.is_empty() {
        if let Ok(max) = heap.pop() {
            print!(" {max}");
        }
    }
    println!();

    print_metrics(&heap.metrics());
}

fn run_benchmark() {
    println!("\n--- Performance Benchmark ---");

    for size in BENCHMARK_SIZES {
        info!("running benchmark for n = {size}");
        println!("\nTesting with n = {size}");

        let data = random_keys(size);

        let start = Instant::now();
        let mut heap = BinaryMaxHeap::from_vec(data);
        let construction = start.elapsed();

        let start = Instant::now();
        while !heap.is_empty() {
            let _ = heap.pop();
        }
        let extraction = start.elapsed();

        let snap = heap.metrics();
        println!("Construction time: {:.3} ms", as_millis(construction));
        println!("Extraction time: {:.3} ms", as_millis(extraction));
        println!("Comparisons: {}", snap.comparisons);
        println!("Swaps: {}", snap.swaps);
        println!("Array accesses: {}", snap.array_accesses);

        heap.reset_metrics();
    }
}

fn run_increase_key_demo() {
    println!("\n--- Increase-Key ---");

    let mut heap = BinaryMaxHeap::with_capacity(10);
    for value in [5, 10, 3, 8, 15] {
        heap.push(value);
    }

    println!("Initial heap: {:?}", heap.as_slice());
    println!("Increasing key at index 2 to 20");

    if let Err(err) = heap.increase_key(2, 20) {
        println!("error: {err}");
        return;
    }

    println!("Heap after increase-key: {:?}", heap.as_slice());
    match heap.peek() {
        Ok(max) => println!("New max element: {max}"),
        Err(err) => println!("error: {err}"),
    }

    print_metrics(&heap.metrics());
}

fn generate_csv() {
    println!("\n--- CSV Benchmark Data ---");
    println!("size,construction_ms,extraction_ms,comparisons,swaps,array_accesses");

    for size in BENCHMARK_SIZES {
        debug!("generating CSV row for n = {size}");

        let data = random_keys(size);

        let start = Instant::now();
        let mut heap = BinaryMaxHeap::from_vec(data);
        let construction = start.elapsed();

        let start = Instant::now();
        while !heap.is_empty() {
            let _ = heap.pop();
        }
        let extraction = start.elapsed();

        let snap = heap.metrics();
        println!(
            "{},{:.3},{:.3},{},{},{}",
            size,
            as_millis(construction),
            as_millis(extraction),
            snap.comparisons,
            snap.swaps,
            snap.array_accesses
        );

        heap.reset_metrics();
    }
}

fn random_keys(size: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    let bound = size as i64 * 10;
    (0..size).map(|_| rng.gen_range(0..bound)).collect()
}

fn as_millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

fn print_metrics(snap: &PerfCounters) {
    println!("=== Performance Metrics ===");
    println!("Comparisons: {}", snap.comparisons);
    println!("Swaps: {}", snap.swaps);
    println!("Array accesses: {}", snap.array_accesses);
    println!("Build heap time (ns): {}", snap.build_time.as_nanos());
    println!("Merge time (ns): {}", snap.merge_time.as_nanos());
}
