//! # ShellBridge - Remote-Controlled Front-End Proxies
//!
//! Exposes front-end capabilities (command registry, shell layout, front-end
//! status) to a backend process as remotely controllable models. The backend
//! sends control messages; the front-end keeps the real objects and mirrors
//! their state back.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   messages    ┌──────────────┐   mutations   ┌──────────────┐
//! │   Backend   │──────────────▶│  Controller  │──────────────▶│   Registry   │
//! │             │               │              │               │   Shell      │
//! │ - Models    │◀──────────────│ - Dispatch   │◀──────────────│              │
//! │             │  state/events │ - Outbox     │   listings    │              │
//! └─────────────┘               └──────────────┘               └──────────────┘
//! ```
//!
//! The command registry is the only model with state to reconcile: commands
//! can be added and removed remotely, executed locally, and the backend always
//! sees a fresh listing even across disconnects.

pub mod bridge;
pub mod cmd_args;
pub mod config;

// Re-export main types for easy access
pub use bridge::*;
