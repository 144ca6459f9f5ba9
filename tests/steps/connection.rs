//! Step definitions for liveness changes and restarts

use crate::common::world::BridgeWorld;
use cucumber::{given, when};
use shellbridge::TransportEvent;
use tracing::info;

#[given(expr = "a previous session stored the commands {string}")]
async fn given_stored(world: &mut BridgeWorld, ids: String) {
    let ids: Vec<String> = ids.split(',').map(|id| id.trim().to_string()).collect();
    world
        .store_records(&ids)
        .expect("Failed to store previous session");
}

#[given("the connection was lost")]
async fn given_connection_lost(world: &mut BridgeWorld) {
    world
        .signal(TransportEvent::ConnectionLost)
        .expect("Failed to process connection loss");
}

#[when("the connection is lost")]
async fn connection_lost(world: &mut BridgeWorld) {
    info!("Dropping connection");
    world
        .signal(TransportEvent::ConnectionLost)
        .expect("Failed to process connection loss");
}

#[when("the connection is re-established")]
async fn connection_regained(world: &mut BridgeWorld) {
    info!("Re-establishing connection");
    world
        .signal(TransportEvent::ConnectionEstablished)
        .expect("Failed to process reconnection");
}

#[when("the bridge restarts")]
async fn bridge_restarts(world: &mut BridgeWorld) {
    world.outbound.clear();
    world.restart();
}

#[when("the bridge starts")]
async fn bridge_starts(world: &mut BridgeWorld) {
    world.controller();
}
