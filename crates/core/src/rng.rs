//! RNG module - random piece selection
//!
//! The default source draws each piece independently and uniformly from the
//! seven kinds (repeats allowed, no bag). A 7-bag source is available for
//! hosts that prefer a fairer sequence.
//!
//! Both are driven by a small seedable LCG so sessions can be replayed.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceBag {
    bag: [PieceKind; 7],
    bag_index: usize,
    rng: SimpleRng,
}

impl PieceBag {
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        bag.refill();
        bag
    }

    fn refill(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    pub fn draw(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill();
        }
        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// Pieces left in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }
}

/// Randomizer strategy used when spawning pieces.
#[derive(Debug, Clone)]
pub enum PieceSource {
    /// Independent uniform draw over all seven kinds
    Uniform(SimpleRng),
    /// Shuffled bag of all seven kinds, refilled when empty
    Bag(PieceBag),
}

impl PieceSource {
    pub fn uniform(seed: u32) -> Self {
        PieceSource::Uniform(SimpleRng::new(seed))
    }

    pub fn bag(seed: u32) -> Self {
        PieceSource::Bag(PieceBag::new(seed))
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        match self {
            PieceSource::Uniform(rng) => {
                let idx = rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[idx]
            }
            PieceSource::Bag(bag) => bag.draw(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PieceSource::Uniform(_) => "uniform",
            PieceSource::Bag(_) => "bag",
        }
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::uniform(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0).state(), 1);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_uniform_source_reaches_every_kind() {
        let mut source = PieceSource::uniform(42);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let kind = source.draw();
            let idx = PieceKind::ALL.iter().position(|k| *k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s), "missing kinds: {:?}", seen);
    }

    #[test]
    fn test_uniform_source_allows_repeats() {
        // With replacement: somewhere in a long run two equal kinds are adjacent.
        let mut source = PieceSource::uniform(3);
        let mut prev = source.draw();
        let mut repeated = false;
        for _ in 0..500 {
            let next = source.draw();
            if next == prev {
                repeated = true;
                break;
            }
            prev = next;
        }
        assert!(repeated);
    }

    #[test]
    fn test_bag_draws_all_seven_per_bag() {
        let mut source = PieceSource::bag(1);
        for _ in 0..3 {
            let mut drawn: Vec<PieceKind> = (0..7).map(|_| source.draw()).collect();
            drawn.sort_by_key(|k| k.as_str());
            drawn.dedup();
            assert_eq!(drawn.len(), 7);
        }
    }

    #[test]
    fn test_bag_remaining_shrinks() {
        let mut bag = PieceBag::new(9);
        assert_eq!(bag.remaining().len(), 7);
        bag.draw();
        assert_eq!(bag.remaining().len(), 6);
    }
}
