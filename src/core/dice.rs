//! Dice: the engine's only source of randomness.
//!
//! Dice are constructed explicitly and handed to whatever needs them.
//! There is no global instance and no lazy initialization anywhere.
//!
//! ## Sharing contract
//!
//! The default arrangement is one [`StandardDie`] owned by one game.
//! To share a single generator across several games (or threads), wrap it in
//! a [`SharedDie`]: every `roll()` takes the lock for exactly one draw, so
//! concurrent callers each receive an independently drawn value with no
//! draw lost or handed out twice.
//!
//! ## Determinism
//!
//! [`StandardDie::new`] is seedable (ChaCha8 underneath): the same seed
//! produces the identical roll sequence, which is what the test suites and
//! replays rely on. [`ScriptedDie`] goes further and removes randomness
//! entirely.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::{Arc, Mutex, PoisonError};

/// A source of die rolls. One uniformly distributed draw per call.
pub trait DieSource {
    /// Produce the next roll.
    fn roll(&mut self) -> u32;
}

/// A fair die with a fixed number of sides, uniform over `1..=sides`.
///
/// Backed by ChaCha8 for speed with reproducible sequences.
#[derive(Clone, Debug)]
pub struct StandardDie {
    inner: ChaCha8Rng,
    sides: u32,
}

impl StandardDie {
    /// The conventional six-sided die used by the standard rule set.
    pub const STANDARD_SIDES: u32 = 6;

    /// Create a six-sided die with a deterministic seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_sides(Self::STANDARD_SIDES, seed)
    }

    /// Create a die with `sides` faces and a deterministic seed.
    ///
    /// `sides` below 1 is clamped to 1 (a die must have at least one face).
    #[must_use]
    pub fn with_sides(sides: u32, seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            sides: sides.max(1),
        }
    }

    /// Create a six-sided die seeded from OS entropy, for real play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
            sides: Self::STANDARD_SIDES,
        }
    }

    /// Number of faces on this die.
    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }
}

impl DieSource for StandardDie {
    fn roll(&mut self) -> u32 {
        self.inner.gen_range(1..=self.sides)
    }
}

/// A die that replays a fixed script of rolls, cycling when exhausted.
///
/// Used by tests and replays to drive the engine down a known path.
#[derive(Clone, Debug)]
pub struct ScriptedDie {
    rolls: Vec<u32>,
    next: usize,
}

impl ScriptedDie {
    /// Create a scripted die. The script must not be empty.
    #[must_use]
    pub fn new(rolls: Vec<u32>) -> Self {
        assert!(!rolls.is_empty(), "scripted die needs at least one roll");
        Self { rolls, next: 0 }
    }
}

impl DieSource for ScriptedDie {
    fn roll(&mut self) -> u32 {
        let roll = self.rolls[self.next];
        self.next = (self.next + 1) % self.rolls.len();
        roll
    }
}

/// A thread-safe handle to one shared [`StandardDie`].
///
/// Clones share the underlying generator; each `roll()` locks for a single
/// draw. A poisoned lock still yields the generator (a die roll cannot be
/// half-finished), so `roll` stays total.
#[derive(Clone, Debug)]
pub struct SharedDie {
    inner: Arc<Mutex<StandardDie>>,
}

impl SharedDie {
    /// Wrap a die for sharing across games or threads.
    #[must_use]
    pub fn new(die: StandardDie) -> Self {
        Self {
            inner: Arc::new(Mutex::new(die)),
        }
    }
}

impl DieSource for SharedDie {
    fn roll(&mut self) -> u32 {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .roll()
    }
}
