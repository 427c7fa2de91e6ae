//! Game rules for vanishing tic-tac-toe.
//!
//! Pure functions over board storage, kept apart so contracts and
//! invariants can reuse them.

pub mod win;

pub use win::{LINES, check_winner};
