//! Collision rules: what happens when a player lands on an occupied cell?
//!
//! The strategy decides; the engine applies. Returning a
//! [`CollisionEffect`] instead of mutating the occupant keeps every
//! position change on the engine's single auditable path and the strategy
//! itself pure.

use serde::{Deserialize, Serialize};

use crate::core::player::Player;

/// Decision returned for one mover/occupant pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionEffect {
    /// Both players stay as they are; they share the cell.
    None,
    /// The occupant is sent back to the start (cell 0).
    SendOccupantToStart,
}

/// Resolves a collision between the moving player and one occupant of the
/// destination cell. Called once per occupant, after entity redirection.
pub trait KillingStrategy {
    /// Decide the effect for this mover/occupant pair.
    fn resolve_collision(&self, mover: &Player, occupant: &Player) -> CollisionEffect;
}

/// Collisions are harmless; players share cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEffect;

impl KillingStrategy for NoEffect {
    fn resolve_collision(&self, _mover: &Player, _occupant: &Player) -> CollisionEffect {
        CollisionEffect::None
    }
}

/// Landing on an opponent knocks them back to the start.
#[derive(Clone, Copy, Debug, Default)]
pub struct SendOpponentBack;

impl KillingStrategy for SendOpponentBack {
    fn resolve_collision(&self, _mover: &Player, _occupant: &Player) -> CollisionEffect {
        CollisionEffect::SendOccupantToStart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::PlayerKind;

    fn player_at(name: &str, position: u32) -> Player {
        let mut player = Player::new(PlayerKind::Bot, name);
        player.set_position(position);
        player
    }

    #[test]
    fn test_no_effect_leaves_both_untouched() {
        let mover = player_at("A", 42);
        let occupant = player_at("B", 42);
        assert_eq!(
            NoEffect.resolve_collision(&mover, &occupant),
            CollisionEffect::None
        );
    }

    #[test]
    fn test_send_back_targets_the_occupant() {
        let mover = player_at("A", 42);
        let occupant = player_at("B", 42);
        assert_eq!(
            SendOpponentBack.resolve_collision(&mover, &occupant),
            CollisionEffect::SendOccupantToStart
        );
    }
}
