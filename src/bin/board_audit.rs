//! Audit of how often generated boards miss a required letter

use std::time::Instant;
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;
use hangul_grid::domain::{decompose, Board, Placement, POOL, WORDS};

/// Count boards missing at least one of `parts`, one seed per board
fn count_misses(parts: &[char], placement: Placement, runs: u64) -> u64 {
    (0..runs)
        .into_par_iter()
        .filter(|&seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            !Board::for_target(parts, &POOL, &mut rng, placement).contains_all(parts)
        })
        .count() as u64
}

fn main() {
    tracing_subscriber::fmt().init();

    println!("=== Board Presence Audit ===\n");

    let runs: u64 = 100_000;

    println!("{:>6} {:>12} {:>12} {:>12}", "Word", "Parts", "Overwrite", "Reserved");
    println!("{:-<46}", "");

    let start = Instant::now();
    let mut totals = [0u64; 2];

    for &word in WORDS {
        let parts = decompose(word);
        let misses = Placement::all().map(|p| count_misses(&parts, p, runs));
        totals[0] += misses[0];
        totals[1] += misses[1];

        let parts_str: String = parts.iter().collect();
        println!(
            "{:>6} {:>12} {:>11.3}% {:>11.3}%",
            word,
            parts_str,
            misses[0] as f64 * 100.0 / runs as f64,
            misses[1] as f64 * 100.0 / runs as f64,
        );
    }

    let boards = runs * WORDS.len() as u64;
    println!("\n=== Totals ({} boards per policy) ===\n", boards);
    for (placement, misses) in Placement::all().iter().zip(totals) {
        println!(
            "{:<10} {:>8} misses ({:.3}%)",
            placement.name(),
            misses,
            misses as f64 * 100.0 / boards as f64
        );
    }
    tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "audit finished");
}
