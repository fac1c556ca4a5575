//! Quiz subdomain
//!
//! - [`question`]: questions and the accepted question-set shapes
//! - [`page`]: one page per axis, in canonical-then-discovery order
//! - [`answer`]: Likert values and the answer map
//! - [`session`]: the quiz state machine

pub mod answer;
pub mod page;
pub mod question;
pub mod session;
