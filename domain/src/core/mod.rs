//! Core domain concepts shared across all subdomains.
//!
//! - [`client::ClientMetadata`]: locale and device class sent with saved results
//! - [`error::DomainError`]: domain-level errors

pub mod client;
pub mod error;
pub mod string;
