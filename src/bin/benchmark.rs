//! Step throughput: serial vs rayon-parallel evolution

use std::time::Instant;
use life_engine::{BoardConfig, GridEngine, StepMode};

fn benchmark(size: u32, mode: StepMode, iterations: u32) -> f64 {
    let config = BoardConfig::new(size, size, 1);
    let mut engine = GridEngine::with_seed(config, 0xC0FFEE)
        .expect("benchmark sizes are non-zero")
        .with_step_mode(mode);
    engine.randomize();

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [50, 100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, StepMode::Serial, iterations);
        let parallel_ms = benchmark(size, StepMode::Parallel, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let cells = 2000.0 * 2000.0;
    let parallel_ms = benchmark(2000, StepMode::Parallel, iterations);
    println!(
        "\nParallel at 2000x2000: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
