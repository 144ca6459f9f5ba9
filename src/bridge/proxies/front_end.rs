//! # Front-End Proxy
//!
//! Announces the front-end to the remote side once it is ready.

use crate::bridge::events::{BridgeEvent, ModelTarget, Outbox, StateAttribute};

#[derive(Debug)]
pub struct FrontEndProxy {
    version: String,
    outbox: Outbox,
}

impl FrontEndProxy {
    pub fn new(version: impl Into<String>, outbox: Outbox) -> Self {
        Self {
            version: version.into(),
            outbox,
        }
    }

    /// Emit `lab_ready` followed by the `version` attribute
    pub fn initialize(&self) {
        self.outbox
            .emit_event(ModelTarget::FrontEnd, BridgeEvent::LabReady);
        self.outbox.set_state(
            ModelTarget::FrontEnd,
            StateAttribute::Version(self.version.clone()),
        );
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}
