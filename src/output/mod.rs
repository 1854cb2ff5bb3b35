//! Terminal output formatting
//!
//! Palette mapping, share text, end-of-game messages and colored printing.

pub mod display;
pub mod formatters;
pub mod palette;
pub mod stats;

pub use display::{format_guess_row, print_grade_result, print_outcome, print_session_stats};
pub use palette::Palette;
pub use stats::{Outcome, SessionStats, outcome_message};
