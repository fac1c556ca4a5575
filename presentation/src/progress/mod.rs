//! Activity reporting while the quiz waits on the scoring service

pub mod reporter;
