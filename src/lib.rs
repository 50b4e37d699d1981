//! # rust-snl
//!
//! A configurable snakes-and-ladders race game engine.
//!
//! ## Design Principles
//!
//! 1. **Rules Are Configuration**: Starting, movement, collision,
//!    extra-turn, and winning behavior are pluggable strategies selected at
//!    game construction. The engine never hardcodes a rule set.
//!
//! 2. **One Mutation Path**: Strategies return decisions; only the turn
//!    engine moves players. Every position change is auditable in one place.
//!
//! 3. **Explicit Randomness**: Dice are constructed and passed in. No
//!    global singleton, no lazy init. Seeded dice make whole games
//!    reproducible; scripted dice make them exact.
//!
//! ## Architecture
//!
//! - **Turns are atomic**: one roll, one redirection, one collision pass,
//!   one requeue decision, then the next player. The engine is
//!   single-threaded and synchronous.
//!
//! - **Fail-fast configuration**: boards, entities, and rosters validate at
//!   construction. An invalid configuration never starts a game.
//!
//! ## Modules
//!
//! - `core`: errors, dice, players
//! - `board`: the numbered track and its snake/ladder entities
//! - `rules`: the five pluggable strategy families
//! - `engine`: turn queue, per-turn state machine, game builder

pub mod board;
pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ConfigurationError, DieSource, NoPrompt, Player, PlayerKind, ScriptedDie, SharedDie,
    StandardDie, StateError, TurnPrompt,
};

pub use crate::board::{Board, BoardEntity, Cell};

pub use crate::rules::{
    AnyRollToStart, BoundedSum, CollisionEffect, ConsecutiveRollLimit, ExactCell, KillingStrategy,
    MoveStrategy, NoEffect, NoExtraTurns, OvershootRule, ReachOrPassEnd, SendOpponentBack,
    SpecialRollStrategy, SpecificRollToStart, StartingStrategy, WinningStrategy,
};

pub use crate::engine::{Game, GameBuilder, GameStatus, TurnRecord};
