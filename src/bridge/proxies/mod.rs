//! # Front-End Proxies
//!
//! Thin one-shot RPC handlers with no state to reconcile across reconnects.

pub mod front_end;
pub mod shell;

pub use front_end::FrontEndProxy;
pub use shell::{InMemoryShell, Placement, Shell, ShellArea, ShellProxy};
