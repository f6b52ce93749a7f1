//! Piece-selection strategies.
//!
//! Both built-in strategies draw from the same 64-bit linear congruential
//! generator, so a match is fully reproducible from its seed.

use std::fmt;

use crate::core::{catalog::PIECES, cell::PieceColor, shape::PieceShape};

/// 64-bit linear congruential generator behind the piece selectors.
///
/// Each draw advances the state once and yields its high 32 bits, which
/// have a far longer period than the low bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg64 {
    state: u64,
}

impl Lcg64 {
    const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub const fn next_value(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(Self::MULTIPLIER).wrapping_add(1);
        (self.state >> 32) as u32
    }
}

/// Piece-selection strategy consulted whenever a fresh piece is needed.
///
/// Implementations are consumed through a `Box<dyn Randomizer>` held by the
/// game state, so custom strategies can be injected by hosts and tests.
pub trait Randomizer: fmt::Debug + Send {
    fn next_shape(&mut self) -> &'static PieceShape;
}

/// Deals every catalog piece exactly once before starting a new bag.
#[derive(Debug, Clone)]
pub struct BagRandomizer {
    lcg: Lcg64,
    chosen: [bool; PieceColor::LEN],
    count: usize,
}

impl BagRandomizer {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            lcg: Lcg64::new(seed),
            chosen: [false; PieceColor::LEN],
            count: 0,
        }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl Randomizer for BagRandomizer {
    #[expect(clippy::cast_possible_truncation)]
    fn next_shape(&mut self) -> &'static PieceShape {
        if self.count == PIECES.len() {
            self.chosen = [false; PieceColor::LEN];
            self.count = 0;
        }
        let mut value = u64::from(self.lcg.next_value());
        let mut index = (value % 7) as usize;
        // Walk forward from the drawn slot until an undealt piece is found.
        while self.chosen[index] {
            value += 1;
            index = (value % 7) as usize;
        }
        self.chosen[index] = true;
        self.count += 1;
        &PIECES[index]
    }
}

/// Draws uniformly but never repeats a piece back-to-back.
#[derive(Debug, Clone)]
pub struct ClassicRandomizer {
    lcg: Lcg64,
    previous: Option<usize>,
}

impl ClassicRandomizer {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            lcg: Lcg64::new(seed),
            previous: None,
        }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl Randomizer for ClassicRandomizer {
    #[expect(clippy::cast_possible_truncation)]
    fn next_shape(&mut self) -> &'static PieceShape {
        // The first draw uses an eighth "miss" slot; it and the previous
        // piece both force a redraw over the plain seven slots.
        let mut index = (self.lcg.next_value() % 8) as usize;
        while index == PIECES.len() || Some(index) == self.previous {
            index = (self.lcg.next_value() % 7) as usize;
        }
        self.previous = Some(index);
        &PIECES[index]
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;

    fn catalog_index(shape: &'static PieceShape) -> usize {
        PIECES
            .iter()
            .position(|candidate| ptr::eq(candidate, shape))
            .unwrap()
    }

    #[test]
    fn lcg_is_deterministic_for_a_seed() {
        let mut a = Lcg64::new(0xfeed_beef);
        let mut b = Lcg64::new(0xfeed_beef);
        for _ in 0..32 {
            assert_eq!(a.next_value(), b.next_value());
        }
    }

    #[test]
    fn lcg_yields_the_high_state_bits() {
        let mut lcg = Lcg64::new(1);
        let state = 1u64.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let expected = u32::try_from(state >> 32).unwrap();
        assert_eq!(lcg.next_value(), expected);
    }

    #[test]
    fn bag_deals_each_piece_once_per_seven_draws() {
        let mut bag = BagRandomizer::new(42);
        for _ in 0..10 {
            let mut seen = [false; PieceColor::LEN];
            for _ in 0..7 {
                let index = catalog_index(bag.next_shape());
                assert!(!seen[index], "piece dealt twice within one bag");
                seen[index] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn bags_from_the_same_seed_match() {
        let mut a = BagRandomizer::new(7);
        let mut b = BagRandomizer::new(7);
        for _ in 0..70 {
            assert!(ptr::eq(a.next_shape(), b.next_shape()));
        }
    }

    #[test]
    fn classic_never_repeats_back_to_back() {
        let mut classic = ClassicRandomizer::new(12345);
        let mut previous = catalog_index(classic.next_shape());
        for _ in 0..500 {
            let index = catalog_index(classic.next_shape());
            assert_ne!(index, previous);
            previous = index;
        }
    }

    #[test]
    fn classic_eventually_draws_every_piece() {
        let mut classic = ClassicRandomizer::new(9);
        let mut seen = [false; PieceColor::LEN];
        for _ in 0..200 {
            seen[catalog_index(classic.next_shape())] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
