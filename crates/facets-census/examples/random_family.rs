//! Random family census
//!
//! - Goal: compare the chain census with the reference census on random families.
//! - Method: draw families of random sets, run both censuses and check that they agree.
//! - Output: distinct subset totals and the time spent by each census.
//!
//! ## Usage
//! ```sh
//! cargo run --example random_family -p facets-census --release
//! # Different family count (e.g. 50 families)
//! cargo run --example random_family -p facets-census --release -- 50
//! ```

use std::time::{Duration, Instant};

use rand::Rng;
use rand::seq::SliceRandom;

use facets_census::domain::brute_force::brute_force_histogram;
use facets_census::{SetStore, compute_histogram, estimated_work};

const DEFAULT_FAMILIES: usize = 20;
const SETS_PER_FAMILY: usize = 8;
const MAX_SET_LEN: usize = 16;

fn main() {
    let families = parse_family_count();
    println!("[Random Family Census]");
    println!("Families: {families}");
    println!("Sets per family: {SETS_PER_FAMILY}, max set size: {MAX_SET_LEN}");

    let mut rng = rand::thread_rng();
    let mut chain_time = Duration::ZERO;
    let mut reference_time = Duration::ZERO;
    let mut visited = 0u128;
    let mut distinct = 0u128;

    for index in 0..families {
        let store = random_store(&mut rng);
        visited += estimated_work(&store);

        let start = Instant::now();
        let histogram = compute_histogram(&store);
        chain_time += start.elapsed();

        let start = Instant::now();
        let reference = brute_force_histogram(&store);
        reference_time += start.elapsed();

        if histogram != reference {
            eprintln!("Mismatch in family {index}: {:?}", store.masks());
            std::process::exit(1);
        }
        distinct += histogram.total();
    }

    println!("Subsets visited: {visited}");
    println!("Distinct subsets: {distinct}");
    println!("Chain census: {:.3} s", chain_time.as_secs_f64());
    println!("Reference census: {:.3} s", reference_time.as_secs_f64());
}

fn parse_family_count() -> usize {
    std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FAMILIES)
}

fn random_store(rng: &mut impl Rng) -> SetStore {
    let mut store = SetStore::new();
    for _ in 0..SETS_PER_FAMILY {
        let mut pool: Vec<u32> = (0..24).collect();
        pool.shuffle(rng);
        pool.truncate(rng.gen_range(1..=MAX_SET_LEN));
        store.add_set(&pool).expect("random sets are valid");
    }
    store
}
