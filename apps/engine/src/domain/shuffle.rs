//! Deterministic shuffling for new quiz attempts.

use crate::domain::catalog::REFERENCE_LABELS;
use crate::domain::state::{Arrangement, ItemId, WorkingItem};

/// Simple deterministic RNG for shuffling.
///
/// Uses a SplitMix64-style generator for good statistical properties while
/// remaining fast and deterministic given a seed.
struct SeededRng {
    state: u64,
}

impl SeededRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        // SplitMix64: well-distributed 64-bit generator.
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z ^= z >> 30;
        z = z.wrapping_mul(0xBF58476D1CE4E5B9);
        z ^= z >> 27;
        z = z.wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn next_range(&mut self, max: usize) -> usize {
        let m = max as u64;
        // Largest multiple of m that fits in u64; values >= limit are
        // discarded by rejection sampling to avoid modulo bias.
        let limit = u64::MAX - (u64::MAX % m);

        loop {
            let x = self.next();
            if x < limit {
                return (x % m) as usize;
            }
        }
    }
}

/// Fisher-Yates shuffle using the deterministic RNG. Shuffles in place.
pub fn shuffle_with_seed<T>(items: &mut [T], seed: u64) {
    let mut rng = SeededRng::new(seed);
    for i in (1..items.len()).rev() {
        let j = rng.next_range(i + 1);
        items.swap(i, j);
    }
}

/// Build a freshly shuffled arrangement for a new attempt.
///
/// The reference sequence itself is never mutated. Identifiers combine the
/// post-shuffle index with the label, guaranteeing uniqueness even if labels
/// repeated.
pub fn shuffled_arrangement(seed: u64) -> Arrangement {
    let mut labels: Vec<&'static str> = REFERENCE_LABELS.to_vec();
    shuffle_with_seed(&mut labels, seed);
    let items = labels
        .into_iter()
        .enumerate()
        .map(|(idx, label)| WorkingItem {
            id: ItemId::new(idx, label),
            label: label.to_string(),
        })
        .collect();
    Arrangement::new(items)
}
