//! # Controllers
//!
//! The dispatch loop that connects transport streams to the bridge models.

pub mod bridge_controller;

pub use bridge_controller::{BridgeController, ControllerOptions};
