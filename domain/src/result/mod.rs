//! Result subdomain
//!
//! - [`key`]: the `IDEO-XXXX-YYYY` retrieval key
//! - [`profile`]: the profile matched by the scoring service
//! - [`entities`]: scored results, stored results and save requests

pub mod entities;
pub mod key;
pub mod profile;
