//! # ShellBridge Main Entry Point
//!
//! Runs the bridge over stdin/stdout with newline-delimited JSON frames.
//! Logs go to stderr.

use anyhow::Result;
use shellbridge::bridge::io::{JsonLinesOutboundStream, StdioMessageStream};
use shellbridge::bridge::proxies::InMemoryShell;
use shellbridge::cmd_args::CommandLineArgs;
use shellbridge::{
    config, BridgeController, ControllerOptions, InMemoryCommandRegistry, JsonFileStore,
};
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();

    init_tracing_subscriber(cmd_args.verbose());

    let store = if cmd_args.no_persist() {
        None
    } else {
        let path = match cmd_args.state() {
            Some(path) => config::expand_path(path),
            None => config::get_state_path(),
        };
        tracing::info!("Persisting desired commands to {}", path);
        Some(JsonFileStore::new(path))
    };

    let mut registry = InMemoryCommandRegistry::new();
    for id in cmd_args.builtins() {
        registry = registry.with_builtin(id);
    }

    let mut options = ControllerOptions {
        store,
        ..ControllerOptions::default()
    };
    if let Some(version) = cmd_args.app_version() {
        options.app_version = version.to_string();
    }

    let mut controller = BridgeController::with_io_streams(
        options,
        registry,
        InMemoryShell::new(),
        StdioMessageStream::new(),
        JsonLinesOutboundStream::stdout(),
    );
    controller.run().await
}

fn init_tracing_subscriber(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(config::log_filter(verbose))
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}
