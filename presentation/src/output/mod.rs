//! Output formatting for the console

pub mod chart;
pub mod console;
