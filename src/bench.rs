use std::time::{Duration, Instant};

use tracing::info;

use crate::merge_sort::{merge_sort, merge_sort_bottom_up};

pub const LG_SIZES: [u32; 4] = [10, 15, 20, 25];
pub const MAX_LG_SIZE: u32 = 25;

fn benchmark(name: &str, repeats: usize, mut f: impl FnMut()) {
    // Warmup.
    f();
    let start = Instant::now();
    for _ in 0..repeats {
        f();
    }
    let duration = start.elapsed();
    println!("  {}: {}", name, human_time(repeats, duration));
}

/// Times each sort on a fresh copy of `data`, `repeats` times.
fn benchmark_sort(name: &str, repeats: usize, data: &[u64], sort: impl Fn(&mut [u64])) {
    let mut scratch = data.to_vec();
    benchmark(name, repeats, || {
        scratch.copy_from_slice(data);
        sort(&mut scratch);
    });
    debug_assert!(scratch.is_sorted());
}

/// Per-repetition time, scaled to the largest unit that keeps the value below 1000.
pub fn human_time(repeats: usize, duration: Duration) -> String {
    let mut value = duration.as_nanos() as f64 / repeats as f64;
    for unit in ["ns", "us", "ms"] {
        if value < 1000.0 {
            return format!("{value:.1}{unit}");
        }
        value /= 1000.0;
    }
    format!("{value:.1}s")
}

pub fn human_size(bytes: usize) -> String {
    if bytes < 1024 {
        return format!("{bytes}B");
    }
    let mut value = bytes as f64 / 1024.0;
    for unit in ["KiB", "MiB"] {
        if value < 1024.0 {
            return format!("{value}{unit}");
        }
        value /= 1024.0;
    }
    format!("{value}GiB")
}

/// Runs every sort over random u64 data for each size in [`LG_SIZES`] up to `max_lg_size`.
pub fn run(max_lg_size: u32) {
    let mut rng = fastrand::Rng::with_seed(0);
    for lg_size in LG_SIZES.into_iter().filter(|&lg| lg <= max_lg_size) {
        let data: Vec<u64> = std::iter::repeat_with(|| rng.u64(..))
            .take(1 << lg_size)
            .collect();
        let repeats = 1usize << MAX_LG_SIZE.saturating_sub(lg_size);
        info!(lg_size, repeats, "benchmarking");
        println!(
            "size: {}",
            human_size(std::mem::size_of::<u64>() * data.len())
        );

        benchmark_sort("merge_sort (top-down)", repeats, &data, merge_sort::<u64>);
        benchmark_sort("merge_sort (bottom-up)", repeats, &data, merge_sort_bottom_up::<u64>);
        benchmark_sort("slice::sort (std)", repeats, &data, |d| d.sort());
    }
}
