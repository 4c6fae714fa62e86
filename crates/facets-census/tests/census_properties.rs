//! Randomized checks of the census against independent computations.
//!
//! Families are kept small (at most 5 sets of at most 10 elements) so the
//! reference census stays cheap.

use facets_census::domain::brute_force::brute_force_histogram;
use facets_census::{Histogram, SetStore, StoreConfig, compute_histogram};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const ROUNDS: usize = 200;

fn random_set(rng: &mut StdRng, max_len: usize) -> Vec<u32> {
    let mut universe: Vec<u32> = (0..64).collect();
    universe.shuffle(rng);
    let len = rng.gen_range(1..=max_len);
    universe.truncate(len);
    universe
}

fn random_family(rng: &mut StdRng) -> Vec<Vec<u32>> {
    let count = rng.gen_range(1..=5);
    (0..count).map(|_| random_set(rng, 10)).collect()
}

/// Family drawn from a narrow range so sets overlap heavily
fn random_overlapping_family(rng: &mut StdRng) -> Vec<Vec<u32>> {
    let count = rng.gen_range(1..=5);
    (0..count)
        .map(|_| {
            let mut pool: Vec<u32> = (0..12).collect();
            pool.shuffle(rng);
            pool.truncate(rng.gen_range(1..=10));
            pool
        })
        .collect()
}

fn store_of(family: &[Vec<u32>]) -> SetStore {
    let mut store = SetStore::new();
    for set in family {
        store.add_set(set).unwrap();
    }
    store
}

fn census(family: &[Vec<u32>]) -> Histogram {
    compute_histogram(&store_of(family))
}

fn binomial(n: u64, k: u64) -> u64 {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

#[test]
fn test_matches_reference_census() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..ROUNDS {
        let family = random_family(&mut rng);
        let store = store_of(&family);
        assert_eq!(
            compute_histogram(&store),
            brute_force_histogram(&store),
            "family {:?}",
            family
        );
    }
}

#[test]
fn test_matches_reference_census_overlapping() {
    let mut rng = StdRng::seed_from_u64(0xface7);
    for _ in 0..ROUNDS {
        let family = random_overlapping_family(&mut rng);
        let store = store_of(&family);
        assert_eq!(
            compute_histogram(&store),
            brute_force_histogram(&store),
            "family {:?}",
            family
        );
    }
}

#[test]
fn test_empty_subset_counted_once() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..ROUNDS {
        let family = random_overlapping_family(&mut rng);
        assert_eq!(census(&family).get(0), 1, "family {:?}", family);
    }
}

#[test]
fn test_single_set_is_binomial() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..50 {
        let set = random_set(&mut rng, 16);
        let m = set.len() as u64;
        let histogram = census(std::slice::from_ref(&set));

        for k in 0..=m {
            assert_eq!(histogram.get(k as usize), binomial(m, k), "set {:?} size {}", set, k);
        }
        assert_eq!(histogram.get(m as usize + 1), 0);
    }
}

#[test]
fn test_declaration_order_within_set_is_irrelevant() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..ROUNDS {
        let family = random_overlapping_family(&mut rng);
        let expected = census(&family);

        let mut shuffled = family.clone();
        for set in &mut shuffled {
            set.shuffle(&mut rng);
        }
        assert_eq!(census(&shuffled), expected, "family {:?}", family);
    }
}

#[test]
fn test_line_order_is_irrelevant() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..ROUNDS {
        let family = random_overlapping_family(&mut rng);
        let expected = census(&family);

        let mut permuted = family.clone();
        permuted.shuffle(&mut rng);
        assert_eq!(census(&permuted), expected, "family {:?}", family);

        permuted.reverse();
        assert_eq!(census(&permuted), expected, "family {:?}", family);
    }
}

#[test]
fn test_adding_contained_set_changes_nothing() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..ROUNDS {
        let family = random_family(&mut rng);
        let expected = census(&family);

        let mut extended = family.clone();
        let mut contained = family[0].clone();
        contained.shuffle(&mut rng);
        contained.truncate(rng.gen_range(1..=contained.len()));
        extended.push(contained);

        assert_eq!(census(&extended), expected, "family {:?}", family);
    }
}

#[test]
fn test_worked_example() {
    let family = vec![vec![1, 3, 5, 6], vec![2, 4, 5, 16, 20], vec![0, 2, 5]];
    let histogram = census(&family);
    assert_eq!(histogram.emitted().collect::<Vec<_>>(), vec![1, 9, 18, 15, 6, 1]);
    assert!((6..=64).all(|k| histogram.get(k) == 0));
}

#[test]
fn test_single_element_boundary() {
    let histogram = census(&[vec![0]]);
    assert_eq!(histogram.emitted().collect::<Vec<_>>(), vec![1, 1]);
}

#[test]
fn test_identical_sets_boundary() {
    let histogram = census(&[vec![1, 2], vec![1, 2]]);
    assert_eq!(histogram, census(&[vec![1, 2]]));
    assert_eq!(histogram.emitted().collect::<Vec<_>>(), vec![1, 2, 1]);
}

#[test]
fn test_empty_sets_accepted_when_configured() {
    let mut store = SetStore::with_config(StoreConfig::default().with_allow_empty(true));
    store.add_set(&[]).unwrap();
    store.add_set(&[9, 8]).unwrap();
    store.add_set(&[]).unwrap();

    let histogram = compute_histogram(&store);
    assert_eq!(histogram.emitted().collect::<Vec<_>>(), vec![1, 2, 1]);
}

#[test]
fn test_large_set_size_tracking() {
    // 2^20 subsets: exercises long successor scans with high elements
    let set: Vec<u32> = (44..64).rev().collect();
    let histogram = census(&[set]);
    assert_eq!(histogram.total(), 1 << 20);
    assert_eq!(histogram.get(10), binomial(20, 10));
    assert_eq!(histogram.max_size(), Some(20));
}
