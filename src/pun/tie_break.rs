//! Tie-break strategies for candidate selection.
//!
//! The selector keeps the first minimum it meets, so the order in which
//! candidates are visited decides between equally good puns. A strategy
//! reorders the selector's private candidate lists before they are sorted by
//! length; shuffling gives variety across runs, [`KeepOrder`] gives
//! deterministic output.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};

/// A source of candidate ordering.
pub trait TieBreak: Send {
    /// Reorder `items` in place.
    fn reorder<T>(&mut self, items: &mut [T]);

    /// Derive an independent strategy, e.g. one per token.
    ///
    /// Forking in a fixed order keeps seeded output identical whether tokens
    /// are processed serially or in parallel.
    #[must_use]
    fn fork(&mut self) -> Self
    where
        Self: Sized;
}

/// Shuffles candidates with a [`StdRng`].
#[derive(Debug, Clone)]
pub struct RandomOrder {
    rng: StdRng,
}

impl RandomOrder {
    /// Seed from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible ordering from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl TieBreak for RandomOrder {
    fn reorder<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    fn fork(&mut self) -> Self {
        Self::seeded(self.rng.next_u64())
    }
}

/// Leaves candidates in word-list order.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepOrder;

impl TieBreak for KeepOrder {
    fn reorder<T>(&mut self, _items: &mut [T]) {}

    fn fork(&mut self) -> Self {
        Self
    }
}

/// Runtime choice between the two strategies.
#[derive(Debug, Clone)]
pub enum Shuffle {
    Random(RandomOrder),
    Off(KeepOrder),
}

impl Shuffle {
    /// Build from the `shuffle` / `seed` configuration pair.
    pub fn new(shuffle: bool, seed: Option<u64>) -> Self {
        match (shuffle, seed) {
            (false, _) => Self::Off(KeepOrder),
            (true, Some(seed)) => Self::Random(RandomOrder::seeded(seed)),
            (true, None) => Self::Random(RandomOrder::from_entropy()),
        }
    }
}

impl TieBreak for Shuffle {
    fn reorder<T>(&mut self, items: &mut [T]) {
        match self {
            Self::Random(random) => random.reorder(items),
            Self::Off(keep) => keep.reorder(items),
        }
    }

    fn fork(&mut self) -> Self {
        match self {
            Self::Random(random) => Self::Random(random.fork()),
            Self::Off(keep) => Self::Off(keep.fork()),
        }
    }
}
