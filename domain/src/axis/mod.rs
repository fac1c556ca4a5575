//! Axis subdomain
//!
//! - [`catalog`]: the five known axes, their labels, poles and canonical order
//! - [`interpretation`]: score formatting and narrative interpretation bands

pub mod catalog;
pub mod interpretation;
