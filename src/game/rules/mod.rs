//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are separated from board
//! storage so the round engine and the tests consume the same
//! evaluation.

pub mod draw;
pub mod win;

pub use draw::check_draw;
pub use win::check_winner;
