//! Game: turn queue, strategy composition, and the turn state machine.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::board::entity::{BoardEntity, Cell};
use crate::board::Board;
use crate::core::dice::{DieSource, StandardDie};
use crate::core::error::{ConfigurationError, StateError};
use crate::core::player::{NoPrompt, Player, PlayerKind, TurnPrompt};
use crate::rules::killing::{CollisionEffect, KillingStrategy, NoEffect};
use crate::rules::movement::{BoundedSum, MoveStrategy};
use crate::rules::special_roll::{NoExtraTurns, SpecialRollStrategy};
use crate::rules::starting::{AnyRollToStart, StartingStrategy};
use crate::rules::winning::{ExactCell, WinningStrategy};

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Queue populated, no turns played.
    NotStarted,
    /// Turns being resolved.
    InProgress,
    /// Winner set; no further turns are processed.
    Finished,
}

/// Everything that happened in one resolved turn.
///
/// Records are appended to [`Game::history`] in order, so a finished game's
/// history doubles as a replay log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number.
    pub turn: u32,
    /// Name of the player whose turn it was.
    pub player: String,
    /// What the die showed.
    pub roll: u32,
    /// Cell before the turn (0 = not started).
    pub from: Cell,
    /// False when the starting rule kept the player on cell 0.
    pub started: bool,
    /// Destination before entities fired; `None` when the player never moved.
    pub tentative: Option<Cell>,
    /// The snake or ladder that fired, if any.
    pub entity: Option<BoardEntity>,
    /// Cell after the turn.
    pub to: Cell,
    /// Opponents knocked back to the start by the collision rule.
    /// At most one occupant under single-occupancy rule sets.
    pub sent_back: SmallVec<[String; 2]>,
    /// Whether the player kept the turn.
    pub extra_turn: bool,
    /// Whether this turn won the game.
    pub won: bool,
}

/// The turn-resolution engine.
///
/// Owns the board, the die, the players, and one variant per rule family.
/// Strictly single-threaded and synchronous: a turn runs to completion
/// before the next begins, and all player mutation happens here.
///
/// ```
/// use rust_snl::board::{Board, BoardEntity};
/// use rust_snl::core::{Player, PlayerKind, ScriptedDie};
/// use rust_snl::engine::GameBuilder;
/// use rust_snl::rules::{BoundedSum, OvershootRule};
///
/// let mut board = Board::new(10).unwrap();
/// board.place_entities(&[BoardEntity::ladder(6, 27).unwrap()]).unwrap();
///
/// let mut game = GameBuilder::new(board)
///     .die(ScriptedDie::new(vec![6]))
///     .movement(BoundedSum::new(OvershootRule::ClampToEnd))
///     .player(Player::new(PlayerKind::Bot, "Ada"))
///     .player(Player::new(PlayerKind::Bot, "Grace"))
///     .build()
///     .unwrap();
///
/// let winner = game.run().unwrap();
/// assert_eq!(winner.name(), "Ada");
/// assert_eq!(winner.position(), 100);
/// ```
pub struct Game {
    board: Board,
    die: Box<dyn DieSource>,
    queue: VecDeque<Player>,
    starting: Box<dyn StartingStrategy>,
    movement: Box<dyn MoveStrategy>,
    killing: Box<dyn KillingStrategy>,
    special_roll: Box<dyn SpecialRollStrategy>,
    winning: Box<dyn WinningStrategy>,
    prompt: Box<dyn TurnPrompt>,
    /// Consecutive qualifying rolls per player; reset on any miss.
    consecutive_special: FxHashMap<String, u32>,
    winner: Option<Player>,
    turns_played: u32,
    history: Vec<TurnRecord>,
}

impl Game {
    /// Resolve one atomic turn for the player at the front of the queue.
    ///
    /// 1. Dequeue the front player and obtain a roll (humans are prompted
    ///    first).
    /// 2. On cell 0, the starting rule decides whether the player moves at
    ///    all; a refused start skips movement but still runs the extra-turn
    ///    bookkeeping below.
    /// 3. The movement rule computes the tentative cell; the entity there
    ///    (if any) fires once.
    /// 4. Every other player on the final cell goes through the collision
    ///    rule, in turn-queue order.
    /// 5. The winning rule checks the final cell: a win finishes the game
    ///    and the winner leaves the queue.
    /// 6. Otherwise the special-roll rule decides the requeue: extra turn
    ///    puts the player back at the front with the counter bumped, else
    ///    at the back with the counter reset.
    ///
    /// Fails with [`StateError::GameFinished`] once a winner is set.
    pub fn play_turn(&mut self) -> Result<TurnRecord, StateError> {
        if let Some(winner) = &self.winner {
            return Err(StateError::GameFinished {
                winner: winner.name().to_string(),
            });
        }
        let mut player = self.queue.pop_front().ok_or(StateError::EmptyTurnQueue)?;

        if player.kind() == PlayerKind::Human {
            self.prompt.before_roll(&player);
        }
        let roll = self.die.roll();
        let from = player.position();
        self.turns_played += 1;

        let mut record = TurnRecord {
            turn: self.turns_played,
            player: player.name().to_string(),
            roll,
            from,
            started: true,
            tentative: None,
            entity: None,
            to: from,
            sent_back: SmallVec::new(),
            extra_turn: false,
            won: false,
        };

        let may_move = player.has_started() || self.starting.can_start(from, roll);
        if may_move {
            let tentative = self.movement.validate(from, roll, self.board.end_cell());
            record.tentative = Some(tentative);

            let entity = self.board.entity_at(tentative).copied();
            let destination = match entity {
                Some(entity) => {
                    trace!(player = %record.player, %entity, "entity fired");
                    record.entity = Some(entity);
                    entity.redirect(tentative)
                }
                None => tentative,
            };

            for occupant in self.queue.iter_mut() {
                if occupant.position() != destination {
                    continue;
                }
                match self.killing.resolve_collision(&player, occupant) {
                    CollisionEffect::None => {}
                    CollisionEffect::SendOccupantToStart => {
                        trace!(
                            mover = %record.player,
                            occupant = %occupant.name(),
                            cell = destination,
                            "occupant sent back to start"
                        );
                        occupant.set_position(0);
                        record.sent_back.push(occupant.name().to_string());
                    }
                }
            }

            player.set_position(destination);
            record.to = destination;

            if self.winning.has_won(destination, self.board.end_cell()) {
                record.won = true;
                info!(
                    winner = %player.name(),
                    turns = self.turns_played,
                    "game finished"
                );
                self.consecutive_special.remove(player.name());
                self.history.push(record.clone());
                self.winner = Some(player);
                return Ok(record);
            }
        } else {
            record.started = false;
        }

        // Bookkeeping runs even when the starting rule refused the move.
        let consecutive = self
            .consecutive_special
            .get(player.name())
            .copied()
            .unwrap_or(0);
        if self.special_roll.extra_turn(roll, consecutive) {
            record.extra_turn = true;
            self.consecutive_special
                .insert(player.name().to_string(), consecutive + 1);
            self.queue.push_front(player);
        } else {
            self.consecutive_special
                .insert(player.name().to_string(), 0);
            self.queue.push_back(player);
        }

        debug!(
            player = %record.player,
            roll,
            from = record.from,
            to = record.to,
            extra_turn = record.extra_turn,
            "turn resolved"
        );
        self.history.push(record.clone());
        Ok(record)
    }

    /// Drive the turn loop until a winner is decided.
    pub fn run(&mut self) -> Result<&Player, StateError> {
        while self.winner.is_none() {
            self.play_turn()?;
        }
        self.winner.as_ref().ok_or(StateError::EmptyTurnQueue)
    }

    /// Drive the turn loop, consulting `keep_going` before each dequeue.
    ///
    /// This is the cancellation checkpoint: returning `false` stops the
    /// loop cleanly between turns (turns themselves are atomic) and yields
    /// `Ok(None)`. Otherwise runs to completion like [`Game::run`].
    pub fn run_while(
        &mut self,
        mut keep_going: impl FnMut() -> bool,
    ) -> Result<Option<&Player>, StateError> {
        while self.winner.is_none() {
            if !keep_going() {
                return Ok(None);
            }
            self.play_turn()?;
        }
        Ok(self.winner.as_ref())
    }

    /// Lifecycle state: not started, in progress, or finished.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.winner.is_some() {
            GameStatus::Finished
        } else if self.turns_played == 0 {
            GameStatus::NotStarted
        } else {
            GameStatus::InProgress
        }
    }

    /// The winner, once the game is finished.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.as_ref()
    }

    /// The board being raced on.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All players: the turn queue in order, then the winner (if any).
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.queue.iter().chain(self.winner.as_ref())
    }

    /// Current cell of the named player.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<Cell> {
        self.players()
            .find(|player| player.name() == name)
            .map(Player::position)
    }

    /// Back-to-back qualifying rolls for the named player since their last
    /// non-qualifying roll.
    #[must_use]
    pub fn consecutive_special_rolls(&self, name: &str) -> u32 {
        self.consecutive_special.get(name).copied().unwrap_or(0)
    }

    /// Number of turns resolved so far.
    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// Every resolved turn, in order.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }
}

/// Builds a [`Game`] from a board, a die, a roster, and one variant per
/// rule family.
///
/// Defaults: entropy-seeded [`StandardDie`], [`AnyRollToStart`],
/// [`BoundedSum`] with the stay-put overshoot rule, [`NoEffect`] collisions,
/// [`NoExtraTurns`], [`ExactCell`] wins, and no human prompt.
pub struct GameBuilder {
    board: Board,
    die: Box<dyn DieSource>,
    players: Vec<Player>,
    starting: Box<dyn StartingStrategy>,
    movement: Box<dyn MoveStrategy>,
    killing: Box<dyn KillingStrategy>,
    special_roll: Box<dyn SpecialRollStrategy>,
    winning: Box<dyn WinningStrategy>,
    prompt: Box<dyn TurnPrompt>,
}

impl GameBuilder {
    /// Start from a board with the default die and rule set.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            die: Box::new(StandardDie::from_entropy()),
            players: Vec::new(),
            starting: Box::new(AnyRollToStart),
            movement: Box::new(BoundedSum::default()),
            killing: Box::new(NoEffect),
            special_roll: Box::new(NoExtraTurns),
            winning: Box::new(ExactCell),
            prompt: Box::new(NoPrompt),
        }
    }

    /// Replace the die.
    #[must_use]
    pub fn die(mut self, die: impl DieSource + 'static) -> Self {
        self.die = Box::new(die);
        self
    }

    /// Add one player. Turn order follows insertion order.
    #[must_use]
    pub fn player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    /// Add several players at once.
    #[must_use]
    pub fn players(mut self, players: impl IntoIterator<Item = Player>) -> Self {
        self.players.extend(players);
        self
    }

    /// Select the starting rule.
    #[must_use]
    pub fn starting(mut self, strategy: impl StartingStrategy + 'static) -> Self {
        self.starting = Box::new(strategy);
        self
    }

    /// Select the movement rule.
    #[must_use]
    pub fn movement(mut self, strategy: impl MoveStrategy + 'static) -> Self {
        self.movement = Box::new(strategy);
        self
    }

    /// Select the collision rule.
    #[must_use]
    pub fn killing(mut self, strategy: impl KillingStrategy + 'static) -> Self {
        self.killing = Box::new(strategy);
        self
    }

    /// Select the special-roll rule.
    #[must_use]
    pub fn special_roll(mut self, strategy: impl SpecialRollStrategy + 'static) -> Self {
        self.special_roll = Box::new(strategy);
        self
    }

    /// Select the winning rule.
    #[must_use]
    pub fn winning(mut self, strategy: impl WinningStrategy + 'static) -> Self {
        self.winning = Box::new(strategy);
        self
    }

    /// Install the prompt invoked for human players before each roll.
    #[must_use]
    pub fn prompt(mut self, prompt: impl TurnPrompt + 'static) -> Self {
        self.prompt = Box::new(prompt);
        self
    }

    /// Validate the roster and assemble the game.
    ///
    /// Fails with [`ConfigurationError::NoPlayers`] on an empty roster and
    /// [`ConfigurationError::DuplicatePlayerName`] when names collide.
    pub fn build(self) -> Result<Game, ConfigurationError> {
        if self.players.is_empty() {
            return Err(ConfigurationError::NoPlayers);
        }
        let mut names = FxHashSet::default();
        for player in &self.players {
            if !names.insert(player.name().to_string()) {
                return Err(ConfigurationError::DuplicatePlayerName {
                    name: player.name().to_string(),
                });
            }
        }

        Ok(Game {
            board: self.board,
            die: self.die,
            queue: self.players.into(),
            starting: self.starting,
            movement: self.movement,
            killing: self.killing,
            special_roll: self.special_roll,
            winning: self.winning,
            prompt: self.prompt,
            consecutive_special: FxHashMap::default(),
            winner: None,
            turns_played: 0,
            history: Vec::new(),
        })
    }
}
