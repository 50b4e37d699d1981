//! Movement rules: where does a roll tentatively land?
//!
//! The tentative destination is computed before any snake or ladder fires.
//! What happens when the sum would pass the end cell is an explicit,
//! configured [`OvershootRule`] rather than a hidden constant.

use serde::{Deserialize, Serialize};

use crate::board::entity::Cell;

/// Computes the tentative destination for a roll.
pub trait MoveStrategy {
    /// New position for `position` + `roll` on a board ending at `end_cell`.
    ///
    /// Total over the documented domain: `position <= end_cell`, `roll >= 1`.
    fn validate(&self, position: Cell, roll: u32, end_cell: Cell) -> Cell;
}

/// What to do when `position + roll` would pass the end cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OvershootRule {
    /// Forfeit the move; the player stays where they are. The classic
    /// "roll exactly or wait" rule, and the default.
    #[default]
    StayPut,
    /// Land on the end cell regardless of the excess.
    ClampToEnd,
    /// Reflect the excess back off the end cell: on a 100-cell board,
    /// 98 + 5 bounces to 97. A reflection that would pass the start cell
    /// stops on cell 1.
    BounceBack,
}

/// Plain forward movement with an explicit overshoot rule.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundedSum {
    overshoot: OvershootRule,
}

impl BoundedSum {
    /// Movement with the given overshoot rule.
    #[must_use]
    pub fn new(overshoot: OvershootRule) -> Self {
        Self { overshoot }
    }

    /// The configured overshoot rule.
    #[must_use]
    pub fn overshoot(&self) -> OvershootRule {
        self.overshoot
    }
}

impl MoveStrategy for BoundedSum {
    fn validate(&self, position: Cell, roll: u32, end_cell: Cell) -> Cell {
        let sum = position + roll;
        if sum <= end_cell {
            return sum;
        }
        match self.overshoot {
            OvershootRule::StayPut => position,
            OvershootRule::ClampToEnd => end_cell,
            OvershootRule::BounceBack => end_cell.saturating_sub(sum - end_cell).max(1),
        }
    }
}
