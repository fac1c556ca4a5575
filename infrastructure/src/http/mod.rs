//! HTTP adapter for the scoring service
//!
//! Implements [`compass_application::ScoringGateway`] with `reqwest` against
//! the service's JSON API:
//!
//! | call | endpoint |
//! |------|----------|
//! | questions | `GET /api/questions` |
//! | scoring | `POST /api/submit` |
//! | save | `POST /api/save_result` |
//! | retrieve | `GET /api/result/{key}` |

pub mod error;
pub mod gateway;
mod wire;

pub use error::HttpError;
pub use gateway::{DEFAULT_BASE_URL, HttpScoringGateway};
