//! Winning rules: has the player reached the end?
//!
//! Consulted after movement and redirection are final for the turn.

use crate::board::entity::Cell;

/// Decides whether a finalized position wins the game.
pub trait WinningStrategy {
    /// True if a player standing on `position` has won.
    fn has_won(&self, position: Cell, end_cell: Cell) -> bool;
}

/// Win by landing exactly on the end cell. Pairs with any overshoot rule.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactCell;

impl WinningStrategy for ExactCell {
    fn has_won(&self, position: Cell, end_cell: Cell) -> bool {
        position == end_cell
    }
}

/// Win by reaching or passing the end cell. For rule sets where any move
/// off the top of the board finishes the race.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReachOrPassEnd;

impl WinningStrategy for ReachOrPassEnd {
    fn has_won(&self, position: Cell, end_cell: Cell) -> bool {
        position >= end_cell
    }
}
