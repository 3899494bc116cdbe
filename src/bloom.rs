//! Probabilistic membership filter used as a cheap pre-check in front of the
//! exact per-language word sets.
//!
//! The filter never reports a false negative: once a word is added, `contains`
//! returns true for it forever. False positives are possible, which is why the
//! spell checker always confirms a hit against the exact dictionary.
//!
//! # Probes
//!
//! Each word is hashed once with a fixed-seed `ahash` state. A second,
//! decorrelated hash is derived from the first with a 64-bit finalizer, and
//! the `k` probe positions come from double hashing:
//!
//! ```text
//! h2 = mix(h1) | 1
//! probe(i) = (h1 + i * h2) mod m
//! ```
//!
//! `h2` varies per word, so the probes of one word are spread over the array
//! instead of forming a run of adjacent bits.

use ahash::RandomState;

const SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// A fixed-size bloom filter over strings.
#[derive(Clone)]
pub struct MembershipFilter {
    bits: Vec<u64>,
    bit_count: usize,
    hash_count: usize,
    state: RandomState,
}

impl MembershipFilter {
    /// Create an all-clear filter with `size` bits and `hash_count` probes.
    ///
    /// A `size` of zero is treated as a single bit, so the filter degenerates
    /// into "everything may be present" instead of failing. With zero probes
    /// `contains` is vacuously true.
    pub fn new(size: usize, hash_count: usize) -> Self {
        let bit_count = size.max(1);
        let chunk_count = bit_count.div_ceil(64);

        Self {
            bits: vec![0u64; chunk_count],
            bit_count,
            hash_count,
            state: RandomState::with_seeds(SEEDS[0], SEEDS[1], SEEDS[2], SEEDS[3]),
        }
    }

    /// Size a filter for `expected_items` at the target false positive rate.
    ///
    /// Uses the usual optimum `m = -n ln p / (ln 2)^2` and `k = (m / n) ln 2`.
    pub fn with_rate(expected_items: usize, false_positive_rate: f64) -> Self {
        let n = expected_items.max(1) as f64;
        let p = if false_positive_rate > 0.0 && false_positive_rate < 1.0 {
            false_positive_rate
        } else {
            0.01
        };
        let ln2 = std::f64::consts::LN_2;

        let m = (-(n * p.ln()) / (ln2 * ln2)).ceil().max(1.0);
        let k = ((m / n) * ln2).round().max(1.0);

        Self::new(m as usize, k as usize)
    }

    /// Set the probe bits for `word`.
    pub fn add(&mut self, word: &str) {
        let (h1, h2) = self.hash_pair(word);
        for i in 0..self.hash_count {
            let index = self.probe(h1, h2, i);
            self.bits[index / 64] |= 1u64 << (index % 64);
        }
    }

    /// Add every word from an iterator.
    pub fn add_all<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add(word.as_ref());
        }
    }

    /// Returns `false` if `word` was definitely never added, `true` if it may
    /// have been.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        let (h1, h2) = self.hash_pair(word);
        for i in 0..self.hash_count {
            let index = self.probe(h1, h2, i);
            if self.bits[index / 64] & (1u64 << (index % 64)) == 0 {
                return false;
            }
        }
        true
    }

    /// Number of addressable bits.
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Number of probes per word.
    pub fn hash_count(&self) -> usize {
        self.hash_count
    }

    /// Number of bits currently set.
    pub fn ones(&self) -> usize {
        self.bits.iter().map(|chunk| chunk.count_ones() as usize).sum()
    }

    /// Theoretical false positive rate after `items` distinct insertions:
    /// `(1 - e^(-k n / m))^k`.
    pub fn estimated_false_positive_rate(&self, items: usize) -> f64 {
        if self.hash_count == 0 {
            return 1.0;
        }
        let k = self.hash_count as f64;
        let exponent = -k * items as f64 / self.bit_count as f64;
        (1.0 - exponent.exp()).powf(k)
    }

    #[inline]
    fn hash_pair(&self, word: &str) -> (u64, u64) {
        let h1 = self.state.hash_one(word);
        let h2 = mix64(h1) | 1;
        (h1, h2)
    }

    #[inline]
    fn probe(&self, h1: u64, h2: u64, i: usize) -> usize {
        let combined = h1.wrapping_add((i as u64).wrapping_mul(h2));
        (combined % self.bit_count as u64) as usize
    }
}

/// SplitMix64 finalizer.
#[inline]
fn mix64(value: u64) -> u64 {
    let mut z = value.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

impl std::fmt::Debug for MembershipFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MembershipFilter")
            .field("bit_count", &self.bit_count)
            .field("hash_count", &self.hash_count)
            .field("ones", &self.ones())
            .finish()
    }
}
