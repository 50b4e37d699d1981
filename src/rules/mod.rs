//! Rule strategies: the five pluggable policy families.
//!
//! Each family is a trait with named variants. One variant per family is
//! selected at game construction, held immutably, and consulted by the turn
//! engine every turn:
//!
//! - [`starting::StartingStrategy`]: may a player on cell 0 leave the start?
//! - [`movement::MoveStrategy`]: where does a roll tentatively land?
//! - [`killing::KillingStrategy`]: what happens on a collision?
//! - [`special_roll::SpecialRollStrategy`]: does the roll grant a replay?
//! - [`winning::WinningStrategy`]: has the player won?
//!
//! Strategies are pure functions of their explicit inputs. The one piece of
//! bookkeeping they depend on (the consecutive special-roll counter) lives
//! in the engine, so every variant is independently testable.

pub mod killing;
pub mod movement;
pub mod special_roll;
pub mod starting;
pub mod winning;

pub use killing::{CollisionEffect, KillingStrategy, NoEffect, SendOpponentBack};
pub use movement::{BoundedSum, MoveStrategy, OvershootRule};
pub use special_roll::{ConsecutiveRollLimit, NoExtraTurns, SpecialRollStrategy};
pub use starting::{AnyRollToStart, SpecificRollToStart, StartingStrategy};
pub use winning::{ExactCell, ReachOrPassEnd, WinningStrategy};
