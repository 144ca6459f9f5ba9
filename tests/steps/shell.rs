//! Step definitions for the shell proxy

use crate::common::world::BridgeWorld;
use cucumber::{then, when};
use serde_json::json;
use shellbridge::bridge::proxies::ShellArea;
use shellbridge::{InboundEnvelope, ModelTarget, TransportEvent};

#[when(expr = "the backend places widget {string} in the {string} area")]
async fn place_widget(world: &mut BridgeWorld, widget: String, area: String) {
    world.mark();
    let envelope = InboundEnvelope::new(
        ModelTarget::Shell,
        "add",
        json!({ "serializedWidget": widget, "area": area, "args": {} }),
    );
    world
        .controller()
        .process_event(TransportEvent::Message(envelope))
        .expect("Failed to process shell message");
}

#[then(expr = "widget {string} is placed in the main area")]
async fn widget_in_main(world: &mut BridgeWorld, widget_id: String) {
    let placements = world.controller().shell().placements().to_vec();
    assert_eq!(placements.len(), 1);
    assert_eq!(placements[0].widget_id, widget_id);
    assert_eq!(placements[0].area, ShellArea::Main);
}

#[then("no widget is placed")]
async fn no_widget(world: &mut BridgeWorld) {
    assert!(world.controller().shell().placements().is_empty());
}
