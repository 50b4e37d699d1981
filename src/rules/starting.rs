//! Starting rules: when may a player leave the start cell?

use crate::board::entity::Cell;

/// Decides whether a player still on cell 0 may start moving.
///
/// Consulted by the engine only while the player's position is 0.
pub trait StartingStrategy {
    /// True if the player may leave the start with this roll.
    fn can_start(&self, position: Cell, roll: u32) -> bool;
}

/// Any roll gets the player moving.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyRollToStart;

impl StartingStrategy for AnyRollToStart {
    fn can_start(&self, _position: Cell, _roll: u32) -> bool {
        true
    }
}

/// The player must roll a specific value to leave the start.
#[derive(Clone, Copy, Debug)]
pub struct SpecificRollToStart {
    required: u32,
}

impl SpecificRollToStart {
    /// Require `required` to be rolled before the first move.
    #[must_use]
    pub fn new(required: u32) -> Self {
        Self { required }
    }

    /// The roll that unlocks the start.
    #[must_use]
    pub fn required(&self) -> u32 {
        self.required
    }
}

impl StartingStrategy for SpecificRollToStart {
    fn can_start(&self, position: Cell, roll: u32) -> bool {
        position != 0 || roll == self.required
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_roll_always_starts() {
        let strategy = AnyRollToStart;
        for roll in 1..=6 {
            assert!(strategy.can_start(0, roll));
        }
    }

    #[test]
    fn test_specific_roll_gates_the_start() {
        let strategy = SpecificRollToStart::new(6);
        assert!(!strategy.can_start(0, 3));
        assert!(!strategy.can_start(0, 5));
        assert!(strategy.can_start(0, 6));
    }

    #[test]
    fn test_specific_roll_is_moot_once_started() {
        let strategy = SpecificRollToStart::new(6);
        assert!(strategy.can_start(10, 3));
        assert!(strategy.can_start(1, 1));
    }

    #[test]
    fn test_required_accessor() {
        assert_eq!(SpecificRollToStart::new(6).required(), 6);
        assert_eq!(SpecificRollToStart::new(1).required(), 1);
    }
}
