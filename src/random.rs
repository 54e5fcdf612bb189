//! Seeded, platform-independent random stream.
//!
//! The same seed text produces the same draws on every platform and in every
//! run. Every tie in the scheduler is broken by shuffle order.
//!
//! # Algorithm
//!
//! 1. The trimmed seed text is hashed with xmur3 over its UTF-16 code units.
//! 2. Four hash outputs seed an sfc32 generator.
//! 3. Each draw emits one 32-bit word, normalized to `[0, 1)` by `2^32`.
//!
//! An empty (or whitespace-only) seed selects a non-reproducible stream whose
//! state is drawn from `rand`'s thread RNG.
//!
//! # Reference
//! Doty-Humphrey, "Practically Random" (sfc32); Bob Jenkins / MurmurHash3
//! finalizer constants (xmur3).

use rand::{Rng, RngCore, SeedableRng};

const TWO_POW_32: f64 = 4_294_967_296.0;
const SEED_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// xmur3 string hash, yielding an endless sequence of 32-bit words.
#[derive(Debug, Clone)]
pub struct SeedHash {
    h: u32,
}

impl SeedHash {
    /// Folds every UTF-16 code unit of `text` into the running hash.
    ///
    /// Order-sensitive: permutations of the same characters hash differently.
    pub fn new(text: &str) -> Self {
        let units: Vec<u16> = text.encode_utf16().collect();
        let mut h = 1_779_033_703u32 ^ units.len() as u32;
        for unit in units {
            h = (h ^ u32::from(unit)).wrapping_mul(3_432_918_353);
            h = h.rotate_left(13);
        }
        Self { h }
    }

    /// Next hash word.
    pub fn next_word(&mut self) -> u32 {
        let mut h = self.h;
        h = (h ^ (h >> 16)).wrapping_mul(2_246_822_507);
        h = (h ^ (h >> 13)).wrapping_mul(3_266_489_909);
        h ^= h >> 16;
        self.h = h;
        h
    }

    /// Four consecutive words, as used to seed [`SeededStream`].
    pub fn state(&mut self) -> [u32; 4] {
        [
            self.next_word(),
            self.next_word(),
            self.next_word(),
            self.next_word(),
        ]
    }
}

/// sfc32 generator producing the scheduler's random draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededStream {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
    reproducible: bool,
}

impl SeededStream {
    /// Creates a stream from seed text.
    ///
    /// The text is trimmed first. Empty text yields a non-reproducible stream.
    pub fn from_seed_text(seed_text: &str) -> Self {
        let seed = seed_text.trim();
        if seed.is_empty() {
            let mut stream = Self::from_state(rand::rng().random());
            stream.reproducible = false;
            return stream;
        }
        Self::from_state(SeedHash::new(seed).state())
    }

    /// Creates a stream from raw sfc32 state words.
    pub fn from_state([a, b, c, d]: [u32; 4]) -> Self {
        Self {
            a,
            b,
            c,
            d,
            reproducible: true,
        }
    }

    /// Whether the stream came from non-empty seed text (or explicit state).
    pub fn is_reproducible(&self) -> bool {
        self.reproducible
    }

    /// Advances the generator and returns the next 32-bit word.
    pub fn next_word(&mut self) -> u32 {
        let mut t = self.a.wrapping_add(self.b);
        self.a = self.b ^ (self.b >> 9);
        self.b = self.c.wrapping_add(self.c << 3);
        self.c = self.c.rotate_left(21);
        self.d = self.d.wrapping_add(1);
        t = t.wrapping_add(self.d);
        self.c = self.c.wrapping_add(t);
        t
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_word()) / TWO_POW_32
    }

    /// Uniform index in `0..bound` (`bound > 0`), as `floor(u * bound)`.
    #[inline]
    pub fn index_below(&mut self, bound: usize) -> usize {
        let idx = (self.next_f64() * bound as f64) as usize;
        idx.min(bound.saturating_sub(1))
    }

    /// Fisher-Yates shuffle in place, from the last index down to 1.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index_below(i + 1);
            items.swap(i, j);
        }
    }

    /// Shuffled copy of `items`.
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut copy = items.to_vec();
        self.shuffle(&mut copy);
        copy
    }
}

impl RngCore for SeededStream {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_word());
        let hi = u64::from(self.next_word());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for SeededStream {
    type Seed = [u8; 16];

    /// Reads four little-endian words as the sfc32 state.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut state = [0u32; 4];
        for (word, chunk) in state.iter_mut().zip(seed.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self::from_state(state)
    }
}

/// Generates a short, URL-safe seed (8 lowercase base-36 characters).
///
/// Useful for callers that want to display the seed of a run instead of
/// scheduling with a non-reproducible empty seed.
pub fn generate_seed() -> String {
    let mut rng = rand::rng();
    (0..8)
        .map(|_| SEED_ALPHABET[rng.random_range(0..SEED_ALPHABET.len())] as char)
        .collect()
}
