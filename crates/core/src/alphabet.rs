//! Candy alphabet - the ordered set of symbols used to fill cells

use arrayvec::ArrayVec;

use crate::error::EngineError;
use crate::rng::RandomSource;
use crate::types::{Candy, MAX_CANDIES};

/// Ordered set of `N` distinct candies, `'1'..='N'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandyAlphabet {
    candies: ArrayVec<Candy, { MAX_CANDIES as usize }>,
}

impl CandyAlphabet {
    /// Build the alphabet of the first `count` candies.
    pub fn new(count: u8) -> Result<Self, EngineError> {
        if count == 0 || count > MAX_CANDIES {
            return Err(EngineError::InvalidCandyCount(count));
        }
        let candies = (1..=count).filter_map(Candy::new).collect();
        Ok(Self { candies })
    }

    pub fn len(&self) -> usize {
        self.candies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candies.is_empty()
    }

    pub fn contains(&self, candy: Candy) -> bool {
        self.candies.contains(&candy)
    }

    pub fn candies(&self) -> &[Candy] {
        &self.candies
    }

    /// Uniform draw of one candy.
    pub fn draw(&self, rng: &mut impl RandomSource) -> Candy {
        let idx = rng.next_range(self.candies.len() as u32) as usize;
        self.candies[idx]
    }
}
