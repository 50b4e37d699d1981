//! Board model: an N×N numbered track with redirection entities.
//!
//! Cells are numbered `1..=size²`. Cell 1 is the start, `size²` is the end,
//! and cell 0 (off the board) means "not yet started". Entities are keyed by
//! their trigger cell and validated as a whole set at placement time:
//! in-bounds, off the reserved cells, one entity per trigger, and no
//! redirection cycles.
//!
//! ```
//! use rust_snl::board::Board;
//! use rust_snl::board::entity::BoardEntity;
//!
//! let mut board = Board::new(10).unwrap();
//! board
//!     .place_entities(&[
//!         BoardEntity::ladder(2, 38).unwrap(),
//!         BoardEntity::snake(99, 7).unwrap(),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(board.end_cell(), 100);
//! assert_eq!(board.entity_at(99).unwrap().redirect(99), 7);
//! assert!(board.entity_at(50).is_none());
//! ```

pub mod entity;

pub use entity::{BoardEntity, Cell};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::ConfigurationError;

/// The race track: `size²` numbered cells plus the placed entities.
///
/// Built once before play and immutable afterwards; a failed
/// [`place_entities`](Board::place_entities) leaves the entity set
/// untouched (all-or-nothing).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: u32,
    end_cell: Cell,
    /// Entities keyed by trigger cell; keys unique by construction.
    entities: FxHashMap<Cell, BoardEntity>,
}

impl Board {
    /// Cell number of the first playable cell.
    pub const START_CELL: Cell = 1;

    /// Create an empty `size`×`size` board. Needs `size >= 2`.
    pub fn new(size: u32) -> Result<Self, ConfigurationError> {
        let end_cell = size
            .checked_mul(size)
            .ok_or(ConfigurationError::InvalidBoardSize { size })?;
        if size < 2 {
            return Err(ConfigurationError::InvalidBoardSize { size });
        }
        Ok(Self {
            size,
            end_cell,
            entities: FxHashMap::default(),
        })
    }

    /// Board edge length.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The start cell, always 1.
    #[must_use]
    pub fn start_cell(&self) -> Cell {
        Self::START_CELL
    }

    /// The winning cell, `size²`.
    #[must_use]
    pub fn end_cell(&self) -> Cell {
        self.end_cell
    }

    /// Place a batch of entities, validating the whole set (the new batch
    /// together with anything already placed):
    ///
    /// 1. triggers and targets within `1..=end_cell`;
    /// 2. no trigger or target on the start or end cell;
    /// 3. one entity per trigger cell;
    /// 4. no redirection cycle.
    ///
    /// On any violation nothing is placed and the error names the first
    /// offending cell.
    pub fn place_entities(&mut self, entities: &[BoardEntity]) -> Result<(), ConfigurationError> {
        let mut staged = self.entities.clone();

        for entity in entities {
            for cell in [entity.trigger_cell(), entity.target_cell()] {
                if cell < Self::START_CELL || cell > self.end_cell {
                    return Err(ConfigurationError::CellOutOfBounds {
                        cell,
                        end_cell: self.end_cell,
                    });
                }
                if cell == Self::START_CELL || cell == self.end_cell {
                    return Err(ConfigurationError::ReservedCell { cell });
                }
            }
            if staged.insert(entity.trigger_cell(), *entity).is_some() {
                return Err(ConfigurationError::DuplicateTrigger {
                    cell: entity.trigger_cell(),
                });
            }
        }

        Self::check_acyclic(&staged)?;
        self.entities = staged;
        Ok(())
    }

    /// The entity triggering at `cell`, if any. Side-effect-free.
    #[must_use]
    pub fn entity_at(&self, cell: Cell) -> Option<&BoardEntity> {
        self.entities.get(&cell)
    }

    /// Number of placed entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Iterate over all placed entities, in no particular order.
    pub fn entities(&self) -> impl Iterator<Item = &BoardEntity> {
        self.entities.values()
    }

    /// Every trigger has exactly one outgoing redirection, so a cycle shows
    /// up as a walk that never leaves the entity set within `len` steps.
    fn check_acyclic(entities: &FxHashMap<Cell, BoardEntity>) -> Result<(), ConfigurationError> {
        for &start in entities.keys() {
            let mut cursor = start;
            for _ in 0..=entities.len() {
                match entities.get(&cursor) {
                    Some(entity) => cursor = entity.target_cell(),
                    None => break,
                }
                if cursor == start {
                    return Err(ConfigurationError::EntityCycle { cell: start });
                }
            }
        }
        Ok(())
    }
}
