//! Common test utilities and infrastructure
//!
//! This module provides shared functionality for integration tests including:
//! - Cucumber world implementation
//! - Outbound message inspection helpers

pub mod world;

// Re-export commonly used items
#[allow(unused_imports)]
pub use world::BridgeWorld;
