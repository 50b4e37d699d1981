//! Turn engine: the FIFO turn queue and per-turn state machine.
//!
//! [`GameBuilder`] wires a board, a die, a roster, and one variant per rule
//! family into a [`Game`]. [`Game::play_turn`] resolves exactly one atomic
//! turn; [`Game::run`] drives the loop to completion and
//! [`Game::run_while`] adds a cancellation checkpoint between turns.

mod game;

pub use game::{Game, GameBuilder, GameStatus, TurnRecord};
