//! Tic-tac-toe with time travel.
//!
//! [`GameEngine`] owns every board snapshot since the empty board and a
//! pointer to the one being viewed. Whose turn it is and who has won are
//! derived from that pointer, never stored. Jumping back in history keeps
//! later moves around until a new move is made from the past, at which point
//! the abandoned future is discarded.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameEngine, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 1, 2] {
//!     engine.apply_move(index);
//! }
//! engine.jump_to(1).unwrap();
//! engine.apply_move(4);
//!
//! assert_eq!(engine.history_len(), 3);
//! assert_eq!(engine.current_turn(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
mod position;
mod types;
mod view;

pub mod invariants;
pub mod rules;

pub use action::{IgnoreReason, Intent, MoveOutcome};
pub use engine::GameEngine;
pub use error::EngineError;
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
pub use view::{GameView, MoveEntry};
