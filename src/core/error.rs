//! Error taxonomy: configuration failures and engine misuse.
//!
//! Both error families are fatal. A `ConfigurationError` means the game
//! must not start; the caller fixes the configuration and reconstructs.
//! A `StateError` means the engine was driven outside its contract. Nothing
//! is recovered automatically, and every variant carries the offending
//! cell, entity, or player so the first violated invariant is diagnosable.

use thiserror::Error;

use crate::board::entity::Cell;

/// Construction- and placement-time failures.
///
/// Raised while assembling a board, an entity, a player, or a game.
/// The game never starts with an invalid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Board too small to race on. Needs at least a 2x2 grid.
    #[error("board size {size} is invalid, the board must be at least 2x2")]
    InvalidBoardSize { size: u32 },

    /// A snake must slide the player backward.
    #[error("snake tail {tail} must be below its head {head}")]
    SnakeOrdering { head: Cell, tail: Cell },

    /// A ladder must carry the player forward.
    #[error("ladder top {top} must be above its bottom {bottom}")]
    LadderOrdering { bottom: Cell, top: Cell },

    /// Entity trigger or target outside the playable cells.
    #[error("cell {cell} is outside the board (valid cells are 1..={end_cell})")]
    CellOutOfBounds { cell: Cell, end_cell: Cell },

    /// Entities may not touch the start or end cell.
    #[error("cell {cell} is reserved (start and end cells cannot hold entities)")]
    ReservedCell { cell: Cell },

    /// Two entities fire from the same cell.
    #[error("two entities share the trigger cell {cell}")]
    DuplicateTrigger { cell: Cell },

    /// Following redirections from this cell loops back on itself.
    #[error("entity chain starting at cell {cell} forms a cycle")]
    EntityCycle { cell: Cell },

    /// Player factory given a kind it does not know.
    #[error("unknown player kind \"{kind}\" (expected \"human\" or \"bot\")")]
    UnknownPlayerKind { kind: String },

    /// Player names identify players; they must be unique per game.
    #[error("duplicate player name \"{name}\"")]
    DuplicatePlayerName { name: String },

    /// A game needs at least one player in the roster.
    #[error("cannot build a game with no players")]
    NoPlayers,
}

/// Engine-internal misuse, surfaced when the turn loop is driven
/// outside its documented state machine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    /// A turn was requested after the winning condition already fired.
    #[error("game is finished ({winner} won), no further turns can be played")]
    GameFinished { winner: String },

    /// The turn queue emptied without a winner. Cannot happen through the
    /// public API; indicates internal state corruption.
    #[error("turn queue is empty")]
    EmptyTurnQueue,
}
