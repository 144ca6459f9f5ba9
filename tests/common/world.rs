use anyhow::Result;
use cucumber::World;
use serde_json::json;
use std::fmt;
use tempfile::TempDir;

// Import real application components
use shellbridge::bridge::io::{MockMessageStream, MockOutboundStream};
use shellbridge::bridge::proxies::InMemoryShell;
use shellbridge::{
    BridgeController, BridgeEvent, CommandOptions, CommandRegistry, ControllerOptions,
    DesiredCommand, InMemoryCommandRegistry, InboundEnvelope, JsonFileStore, ModelTarget,
    OutboundMessage, StateAttribute, TransportEvent,
};

pub type TestController = BridgeController<
    MockMessageStream,
    MockOutboundStream,
    InMemoryCommandRegistry,
    InMemoryShell,
>;

/// Bridge state for a scenario.
///
/// The controller is built lazily on first use so `Given` steps can seed the
/// registry and the stored records before initialization runs.
#[derive(World)]
#[world(init = Self::new)]
pub struct BridgeWorld {
    /// Pre-existing registry commands
    pub builtins: Vec<String>,

    /// Holds the state file shared by consecutive sessions
    pub state_dir: TempDir,

    /// Real controller instance
    pub controller: Option<TestController>,

    /// Everything the bridge sent since the last `When` step
    pub outbound: MockOutboundStream,
}

impl fmt::Debug for BridgeWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeWorld")
            .field("builtins", &self.builtins)
            .field("state_dir", &self.state_dir.path())
            .field("started", &self.controller.is_some())
            .field("sent", &self.outbound.sent().len())
            .finish()
    }
}

impl BridgeWorld {
    pub fn new() -> Self {
        Self {
            builtins: Vec::new(),
            state_dir: TempDir::new().expect("Failed to create state dir"),
            controller: None,
            outbound: MockOutboundStream::new(),
        }
    }

    /// Build and initialize the controller if that has not happened yet
    pub fn controller(&mut self) -> &mut TestController {
        if self.controller.is_none() {
            let mut registry = InMemoryCommandRegistry::new();
            for id in &self.builtins {
                registry = registry.with_builtin(id);
            }

            let options = ControllerOptions {
                store: Some(self.store()),
                ..ControllerOptions::default()
            };
            let mut controller = BridgeController::with_io_streams(
                options,
                registry,
                InMemoryShell::new(),
                MockMessageStream::empty(),
                self.outbound.clone(),
            );
            controller
                .initialize()
                .expect("Failed to initialize controller");
            self.controller = Some(controller);
        }
        self.controller.as_mut().expect("controller was just created")
    }

    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(self.state_dir.path().join("commands.json"))
    }

    /// Persist records as a previous session would have left them
    pub fn store_records(&mut self, ids: &[String]) -> Result<()> {
        let records: Vec<DesiredCommand> = ids.iter().map(CommandOptions::new).collect();
        self.store().save(&records)
    }

    pub fn stored_records(&self) -> Result<Vec<DesiredCommand>> {
        self.store().load()
    }

    /// Drop the running controller, keeping the state file for the next session
    pub fn restart(&mut self) {
        self.controller = None;
        self.controller();
    }

    /// Forget outbound messages sent so far
    pub fn mark(&mut self) {
        self.controller();
        self.outbound.clear();
    }

    pub fn send(&mut self, func: &str, payload: serde_json::Value) -> Result<()> {
        self.mark();
        self.controller()
            .process_event(TransportEvent::Message(InboundEnvelope::new(
                ModelTarget::Commands,
                func,
                payload,
            )))
    }

    pub fn add_command(&mut self, id: &str) -> Result<()> {
        self.send("addCommand", json!({ "id": id }))
    }

    pub fn signal(&mut self, event: TransportEvent) -> Result<()> {
        self.mark();
        self.controller().process_event(event)
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.outbound.sent()
    }

    /// Most recent `command_list` update since the last mark
    pub fn last_listing(&self) -> Option<Vec<String>> {
        self.sent().iter().rev().find_map(|m| match m.as_update() {
            Some(StateAttribute::CommandList(ids)) => Some(ids.clone()),
            _ => None,
        })
    }

    pub fn execute_events(&self) -> Vec<String> {
        self.sent()
            .iter()
            .filter_map(|m| match m.as_event() {
                Some(BridgeEvent::Execute { id }) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn registry_ids(&mut self) -> Vec<String> {
        self.controller().engine().registry().list_commands()
    }
}

impl Default for BridgeWorld {
    fn default() -> Self {
        Self::new()
    }
}
