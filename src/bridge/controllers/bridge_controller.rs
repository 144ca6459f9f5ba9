//! # Bridge Controller
//!
//! Owns the models and runs the dispatch loop. Exactly one transport event is
//! processed to completion before the next is read, then everything the models
//! queued in the outbox is written to the outbound stream.

use anyhow::Result;
use serde_json::Value;
use std::time::Duration;

use crate::bridge::{
    events::{
        CommandMessage, InboundEnvelope, ModelTarget, Outbox, OutboxReceiver, StateAttribute,
        TransportEvent,
    },
    io::{MessageStream, OutboundStream},
    models::DesiredCommand,
    proxies::{FrontEndProxy, Shell, ShellProxy},
    registry::CommandRegistry,
    store::JsonFileStore,
    sync::CommandSyncEngine,
};
use crate::config;

/// Settings for a controller instance
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    /// Version reported by the front-end proxy
    pub app_version: String,
    /// Where Desired-Command Records are persisted; `None` keeps them in memory
    pub store: Option<JsonFileStore>,
    pub poll_interval: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            store: None,
            poll_interval: Duration::from_millis(config::DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

pub struct BridgeController<MS, OS, R, S>
where
    MS: MessageStream,
    OS: OutboundStream,
    R: CommandRegistry,
    S: Shell,
{
    engine: CommandSyncEngine<R>,
    shell: ShellProxy<S>,
    front_end: FrontEndProxy,
    outbox: OutboxReceiver,
    message_stream: MS,
    outbound_stream: OS,
    store: Option<JsonFileStore>,
    poll_interval: Duration,
    initialized: bool,
    should_quit: bool,
}

impl<MS, OS, R, S> BridgeController<MS, OS, R, S>
where
    MS: MessageStream,
    OS: OutboundStream,
    R: CommandRegistry,
    S: Shell,
{
    /// Create a controller with injected streams and front-end capabilities
    pub fn with_io_streams(
        options: ControllerOptions,
        registry: R,
        shell: S,
        message_stream: MS,
        outbound_stream: OS,
    ) -> Self {
        let (outbox, receiver) = Outbox::channel();

        Self {
            engine: CommandSyncEngine::new(registry, outbox.clone()),
            shell: ShellProxy::new(shell),
            front_end: FrontEndProxy::new(options.app_version, outbox),
            outbox: receiver,
            message_stream,
            outbound_stream,
            store: options.store,
            poll_interval: options.poll_interval,
            initialized: false,
            should_quit: false,
        }
    }

    /// Replay stored commands and announce the front-end. Runs once.
    pub fn initialize(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }
        self.initialized = true;

        let records = match self.store.as_ref().map(JsonFileStore::load) {
            Some(Ok(records)) => records,
            Some(Err(e)) => {
                // Leave the unreadable file as it is for the user to recover
                tracing::warn!(
                    "Starting without stored commands, persistence disabled: {:#}",
                    e
                );
                self.store = None;
                Vec::new()
            }
            None => Vec::new(),
        };

        self.engine.initialize(records);
        self.front_end.initialize();
        self.flush_outbox()
    }

    /// Run the main dispatch loop until the stream closes
    pub async fn run(&mut self) -> Result<()> {
        self.initialize()?;
        tracing::info!("Bridge running");

        while !self.should_quit && !self.message_stream.is_exhausted() {
            let interval = self.poll_interval;
            let stream = &mut self.message_stream;
            if tokio::task::block_in_place(|| stream.poll(interval))? {
                let event = self.message_stream.read()?;
                self.process_event(event)?;
            }
        }

        tracing::info!("Bridge stopped");
        Ok(())
    }

    /// Process a single pending event, if any. Returns whether one was processed.
    pub fn tick(&mut self) -> Result<bool> {
        self.initialize()?;
        if !self.message_stream.poll(Duration::ZERO)? {
            return Ok(false);
        }
        let event = self.message_stream.read()?;
        self.process_event(event)?;
        Ok(true)
    }

    pub fn process_event(&mut self, event: TransportEvent) -> Result<()> {
        tracing::debug!("Processing transport event: {:?}", event);

        match event {
            TransportEvent::Message(envelope) => self.dispatch(envelope),
            TransportEvent::ConnectionEstablished => {
                self.engine.set_live(true);
            }
            TransportEvent::ConnectionLost => {
                self.engine.set_live(false);
            }
            TransportEvent::Closed => self.should_quit = true,
        }

        self.flush_outbox()
    }

    /// Invoke a registry command from the front-end side, e.g. a palette click
    pub fn invoke_command(&mut self, id: &str, args: &Value) -> Result<bool> {
        let found = self.engine.registry().execute(id, args);
        if !found {
            tracing::debug!("No command '{}' to invoke", id);
        }
        self.flush_outbox()?;
        Ok(found)
    }

    fn dispatch(&mut self, envelope: InboundEnvelope) {
        match envelope.model {
            ModelTarget::Commands => match CommandMessage::parse(&envelope) {
                Ok(message) => self.engine.handle_message(message),
                Err(e) => tracing::warn!("Rejected command message: {}", e),
            },
            ModelTarget::Shell => {
                if let Err(e) = self.shell.handle_message(&envelope) {
                    tracing::warn!("Rejected shell message '{}': {:#}", envelope.func, e);
                }
            }
            ModelTarget::FrontEnd => {
                tracing::debug!("Ignoring front-end function '{}'", envelope.func);
            }
        }
    }

    fn flush_outbox(&mut self) -> Result<()> {
        let messages = self.outbox.drain();
        if messages.is_empty() {
            return Ok(());
        }

        for message in &messages {
            if let Some(StateAttribute::Commands(records)) = message.as_update() {
                self.persist(records);
            }
            self.outbound_stream.send(message)?;
        }
        self.outbound_stream.flush()
    }

    fn persist(&self, records: &[DesiredCommand]) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save(records) {
                tracing::warn!("Failed to persist desired commands: {:#}", e);
            }
        }
    }

    pub fn engine(&self) -> &CommandSyncEngine<R> {
        &self.engine
    }

    pub fn shell(&self) -> &S {
        self.shell.shell()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
