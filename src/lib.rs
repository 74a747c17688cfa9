//! Console tic-tac-toe for two local players.
//!
//! # Architecture
//!
//! - **Game**: board, marks, and rule evaluation over a static line table
//! - **Input**: pure parsing of raw prompt lines into board coordinates
//! - **Console**: line I/O boundary, swappable for tests
//! - **Session**: the prompt loop replaying rounds until the player quits
//!
//! # Example
//!
//! ```
//! use tictactoe::{Coordinate, GameStatus, Round};
//!
//! let mut round = Round::new();
//! let center = Coordinate::new(1, 1).expect("in range");
//! let status = round.play(center)?;
//! assert_eq!(status, GameStatus::InProgress);
//! # Ok::<(), tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod game;
mod input;
mod session;

// Crate-level exports - Console boundary
pub use console::{Console, StdConsole};

// Crate-level exports - Game types
pub use game::{Board, Cell, Coordinate, GameStatus, Mark, Move, MoveError, Outcome, Round};

// Crate-level exports - Rule evaluation
pub use game::rules;

// Crate-level exports - Input parsing
pub use input::{InputError, parse_move};

// Crate-level exports - Session loop
pub use session::{Session, SessionError};
