//! Throughput comparison of the serial and row-parallel advance backends

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lifeterm::{Algorithm, Boundary, Seed, Simulator};

fn bench_advance(size: usize, algorithm: Algorithm, generations: u32) -> f64 {
    let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);
    let grid = Seed::Random { density: 0.3 }
        .build(size, size, &mut rng)
        .expect("grid build");
    let mut sim = Simulator::new(grid, Boundary::Wrapped).with_algorithm(algorithm);

    let start = Instant::now();
    for _ in 0..generations {
        sim.advance();
    }
    start.elapsed().as_secs_f64() * 1000.0 / generations as f64
}

fn main() {
    println!("=== lifeterm advance benchmark (ms/generation) ===\n");

    let sizes = [64, 128, 256, 512, 1024];
    let generations = 20;

    println!("{:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<50}", "");

    for size in sizes {
        let serial_ms = bench_advance(size, Algorithm::Serial, generations);
        let parallel_ms = bench_advance(size, Algorithm::Parallel, generations);

        println!(
            "{:>12} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{size}x{size}"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
