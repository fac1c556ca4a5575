//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod result_controller;
pub mod run_quiz;
pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod testing;
