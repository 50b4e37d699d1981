//! Players: identity, kind, and track position.
//!
//! A player is a name (unique per game), a kind, and a position. Position 0
//! means the player has not left the start yet. Positions are mutated only
//! by the turn engine; outside the crate the field is read-only.
//!
//! The human/bot split matters in exactly one place: before rolling for a
//! [`PlayerKind::Human`], the engine calls [`TurnPrompt::before_roll`],
//! which is where an embedder blocks on "press enter to roll". Bots roll
//! immediately. The engine is otherwise indifferent to the kind.

use serde::{Deserialize, Serialize};

use crate::board::entity::Cell;
use crate::core::error::ConfigurationError;

/// Who is driving the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Waits on external input before each roll.
    Human,
    /// Rolls immediately.
    Bot,
}

impl PlayerKind {
    /// Parse a kind string, case-insensitively.
    ///
    /// Unknown kinds fail with [`ConfigurationError::UnknownPlayerKind`].
    pub fn parse(kind: &str) -> Result<Self, ConfigurationError> {
        match kind.to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "bot" => Ok(Self::Bot),
            _ => Err(ConfigurationError::UnknownPlayerKind {
                kind: kind.to_string(),
            }),
        }
    }
}

/// One racer: a name, a kind, and a current cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    position: Cell,
}

impl Player {
    /// Create a player of a known kind, starting off the board.
    #[must_use]
    pub fn new(kind: PlayerKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            position: 0,
        }
    }

    /// Factory from a kind string: `"human"` or `"bot"` (any case).
    ///
    /// ```
    /// use rust_snl::core::player::{Player, PlayerKind};
    ///
    /// let bot = Player::create("bot", "Marvin").unwrap();
    /// assert_eq!(bot.kind(), PlayerKind::Bot);
    /// assert_eq!(bot.position(), 0);
    ///
    /// assert!(Player::create("alien", "Zork").is_err());
    /// ```
    pub fn create(kind: &str, name: impl Into<String>) -> Result<Self, ConfigurationError> {
        Ok(Self::new(PlayerKind::parse(kind)?, name))
    }

    /// The player's name. Assigned at creation and never changes.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human or bot.
    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Current cell, 0 while not yet started.
    #[must_use]
    pub fn position(&self) -> Cell {
        self.position
    }

    /// Whether the player has left the start.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.position != 0
    }

    /// Position changes funnel through the engine; crate-private.
    pub(crate) fn set_position(&mut self, position: Cell) {
        self.position = position;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.name, self.position)
    }
}

/// Hook the engine invokes for a human player immediately before rolling.
///
/// Implementations may block (read a line, await a button). The engine
/// never calls this for bots, and console I/O itself stays outside the
/// crate; [`NoPrompt`] is the default for headless games and tests.
pub trait TurnPrompt {
    /// Called once per human turn, before the die is rolled.
    fn before_roll(&mut self, player: &Player);
}

/// Prompt that does nothing; bots-only and headless games use this.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPrompt;

impl TurnPrompt for NoPrompt {
    fn before_roll(&mut self, _player: &Player) {}
}
