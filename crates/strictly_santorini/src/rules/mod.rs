//! Win and loss rules for Santorini.

pub mod stalemate;
pub mod win;

pub use stalemate::check_stalemate;
pub use win::{MoveStep, evaluate_move};
