//! Line evaluation rules.
//!
//! Pure functions that evaluate lines and boards. Rules are kept apart
//! from board storage so both the engine and the autonomous authority can
//! query them.

pub mod draw;
pub mod win;

pub use draw::is_tie;
pub use win::{find_immediate_win_for, find_winner, is_completion_opportunity, is_won_by, Win};
