//! Board entities: single-cell redirections.
//!
//! An entity binds one trigger cell to one target cell. Landing on the
//! trigger moves the player to the target; every other cell is untouched.
//! The variant set is a closed enum: adding a new entity kind means adding
//! a variant together with its construction validator, not a runtime stub.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigurationError;

/// An integer position on the board: `1..=size²`, with 0 reserved for
/// "not yet started".
pub type Cell = u32;

/// A directed single-cell redirection placed on the board.
///
/// Construction validates the ordering invariant immediately, so a snake
/// always slides backward and a ladder always climbs forward:
///
/// ```
/// use rust_snl::board::entity::BoardEntity;
///
/// let snake = BoardEntity::snake(99, 7).unwrap();
/// assert_eq!(snake.redirect(99), 7);
/// assert_eq!(snake.redirect(50), 50);
///
/// assert!(BoardEntity::snake(7, 99).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardEntity {
    /// Slides a player from its head down to its tail.
    Snake { head: Cell, tail: Cell },
    /// Carries a player from its bottom up to its top.
    Ladder { bottom: Cell, top: Cell },
}

impl BoardEntity {
    /// Create a snake. Fails unless `tail < head`.
    pub fn snake(head: Cell, tail: Cell) -> Result<Self, ConfigurationError> {
        if tail >= head {
            return Err(ConfigurationError::SnakeOrdering { head, tail });
        }
        Ok(Self::Snake { head, tail })
    }

    /// Create a ladder. Fails unless `top > bottom`.
    pub fn ladder(bottom: Cell, top: Cell) -> Result<Self, ConfigurationError> {
        if top <= bottom {
            return Err(ConfigurationError::LadderOrdering { bottom, top });
        }
        Ok(Self::Ladder { bottom, top })
    }

    /// The cell at which this entity fires.
    #[must_use]
    pub fn trigger_cell(&self) -> Cell {
        match *self {
            Self::Snake { head, .. } => head,
            Self::Ladder { bottom, .. } => bottom,
        }
    }

    /// The cell this entity moves a player to.
    #[must_use]
    pub fn target_cell(&self) -> Cell {
        match *self {
            Self::Snake { tail, .. } => tail,
            Self::Ladder { top, .. } => top,
        }
    }

    /// Apply this entity to a position: the target cell when standing on
    /// the trigger, identity everywhere else. Total and pure.
    #[must_use]
    pub fn redirect(&self, position: Cell) -> Cell {
        if position == self.trigger_cell() {
            self.target_cell()
        } else {
            position
        }
    }
}

impl std::fmt::Display for BoardEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Snake { head, tail } => write!(f, "snake {head}->{tail}"),
            Self::Ladder { bottom, top } => write!(f, "ladder {bottom}->{top}"),
        }
    }
}
