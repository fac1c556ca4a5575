//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod activity;
pub mod device;
pub mod presentation;
pub mod scoring_gateway;
