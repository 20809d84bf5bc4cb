//! Game rules.
//!
//! Win detection is the only rule the board itself is judged by; turn
//! ownership and skill preconditions live in the controller.

pub mod win;

pub use win::{check_win, run_through, DIRECTIONS};
