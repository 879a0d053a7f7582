//! RNG module - deterministic piece and tile-value generation
//!
//! Pieces come from the "7-bag" randomizer used in modern Tetris: each bag
//! holds one of every piece kind, shuffled, and a new bag is shuffled when
//! the old one runs out. Tile values are drawn per mino at spawn time (2
//! most of the time, occasionally 4). Everything derives from one seeded
//! LCG, so a game replays identically from its seed.

use tetris2048_types::{PieceKind, FOUR_TILE_ODDS};

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// 7-bag piece generator that also hands out spawn tile values.
#[derive(Debug, Clone)]
pub struct PieceQueue {
    bag: [PieceKind; 7],
    bag_index: usize,
    rng: SimpleRng,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        queue.rng.shuffle(&mut queue.bag);
        queue
    }

    /// Draw the next piece kind, refilling the bag when it runs out.
    pub fn draw(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.bag = PieceKind::ALL;
            self.rng.shuffle(&mut self.bag);
            self.bag_index = 0;
        }

        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }

    /// Draw a spawn value for one mino: 4 one time in
    /// [`FOUR_TILE_ODDS`], 2 otherwise.
    pub fn draw_value(&mut self) -> u32 {
        if self.rng.next_range(FOUR_TILE_ODDS) == 0 {
            4
        } else {
            2
        }
    }

    /// Remaining pieces in the current bag, for tests.
    #[cfg(test)]
    fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
