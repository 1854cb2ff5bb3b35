//! Command implementations

pub mod grade;
pub mod simple;

pub use grade::{GradeResult, grade_words};
pub use simple::{SimpleOptions, play_session, run_simple};
