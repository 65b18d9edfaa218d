//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. The engine applies them to
//! whichever history entry is being viewed, so they never see move order.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};
