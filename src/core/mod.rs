//! Core types: errors, dice, players.
//!
//! The building blocks every other module leans on. Nothing here knows
//! about boards or rule strategies.

pub mod dice;
pub mod error;
pub mod player;

pub use dice::{DieSource, ScriptedDie, SharedDie, StandardDie};
pub use error::{ConfigurationError, StateError};
pub use player::{NoPrompt, Player, PlayerKind, TurnPrompt};
