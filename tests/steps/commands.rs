//! Step definitions for the command registry protocol

use crate::common::world::BridgeWorld;
use cucumber::{given, then, when};
use serde_json::json;
use shellbridge::CommandRegistry;
use tracing::debug;

fn split_ids(list: &str) -> Vec<String> {
    list.split(',')
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect()
}

#[given(expr = "the registry contains a pre-existing command {string}")]
async fn given_builtin(world: &mut BridgeWorld, id: String) {
    assert!(
        world.controller.is_none(),
        "Builtins must be declared before the bridge starts"
    );
    world.builtins.push(id);
}

#[given("the bridge is running")]
async fn given_running(world: &mut BridgeWorld) {
    world.mark();
}

#[given(expr = "the backend has added commands {string}")]
async fn backend_has_added_commands(world: &mut BridgeWorld, ids: String) {
    for id in split_ids(&ids) {
        world.add_command(&id).expect("Failed to add command");
    }
}

#[when(expr = "the backend adds command {string}")]
async fn backend_adds_command(world: &mut BridgeWorld, id: String) {
    debug!("Adding command {}", id);
    world.add_command(&id).expect("Failed to add command");
}

#[when(expr = "the backend adds command {string} labelled {string}")]
async fn backend_adds_labelled_command(world: &mut BridgeWorld, id: String, label: String) {
    world
        .send("addCommand", json!({ "id": id, "label": label }))
        .expect("Failed to add command");
}

#[when(expr = "the backend removes command {string}")]
async fn backend_removes_command(world: &mut BridgeWorld, id: String) {
    world
        .send("removeCommand", json!({ "id": id }))
        .expect("Failed to remove command");
}

#[when(expr = "the backend executes command {string}")]
async fn backend_executes_command(world: &mut BridgeWorld, id: String) {
    world
        .send("execute", json!({ "id": id, "args": {} }))
        .expect("Failed to execute command");
}

#[when(expr = "the command {string} is invoked from the front-end")]
async fn front_end_invokes_command(world: &mut BridgeWorld, id: String) {
    world.mark();
    world
        .controller()
        .invoke_command(&id, &json!({}))
        .expect("Failed to invoke command");
}

#[then(expr = "the listing contains {string} exactly once")]
async fn listing_contains_once(world: &mut BridgeWorld, id: String) {
    let listing = world.last_listing().expect("No listing was published");
    assert_eq!(listing.iter().filter(|l| **l == id).count(), 1, "{listing:?}");
}

#[then(expr = "the listing does not contain {string}")]
async fn listing_excludes(world: &mut BridgeWorld, id: String) {
    let listing = world.last_listing().expect("No listing was published");
    assert!(!listing.contains(&id), "{listing:?}");
}

#[then(expr = "the published listing is {string}")]
async fn listing_is(world: &mut BridgeWorld, ids: String) {
    let listing = world.last_listing().expect("No listing was published");
    assert_eq!(listing, split_ids(&ids));
}

#[then("no listing is published")]
async fn no_listing(world: &mut BridgeWorld) {
    assert_eq!(world.last_listing(), None);
}

#[then(expr = "the registry contains {string}")]
async fn registry_contains(world: &mut BridgeWorld, id: String) {
    assert!(world.registry_ids().contains(&id));
}

#[then(expr = "the registry has {int} command(s)")]
async fn registry_count(world: &mut BridgeWorld, count: usize) {
    let registry_count = world.controller().engine().registry().command_count();
    assert_eq!(registry_count, count);
}

#[then("the bridge owns no commands")]
async fn owns_nothing(world: &mut BridgeWorld) {
    assert!(world.controller().engine().custom_command_ids().is_empty());
}

#[then(expr = "the bridge owns {string}")]
async fn owns_commands(world: &mut BridgeWorld, ids: String) {
    assert_eq!(
        world.controller().engine().custom_command_ids(),
        split_ids(&ids)
    );
}

#[then(expr = "the desired commands are {string}")]
async fn desired_commands_are(world: &mut BridgeWorld, ids: String) {
    let desired: Vec<String> = world
        .controller()
        .engine()
        .desired_commands()
        .iter()
        .map(|record| record.id.clone())
        .collect();
    assert_eq!(desired, split_ids(&ids));
}

#[then(expr = "the stored commands are {string}")]
async fn stored_commands_are(world: &mut BridgeWorld, ids: String) {
    let stored: Vec<String> = world
        .stored_records()
        .expect("Failed to load stored commands")
        .into_iter()
        .map(|record| record.id)
        .collect();
    assert_eq!(stored, split_ids(&ids));
}

#[then(expr = "the desired command {string} is labelled {string}")]
async fn desired_label(world: &mut BridgeWorld, id: String, label: String) {
    let controller = world.controller();
    let record = controller
        .engine()
        .desired_commands()
        .iter()
        .find(|record| record.id == id)
        .expect("Command not recorded");
    assert_eq!(record.label.as_deref(), Some(label.as_str()));
}

#[then("no execute event is emitted")]
async fn no_execute_event(world: &mut BridgeWorld) {
    assert!(world.execute_events().is_empty());
}

#[then(expr = "exactly one execute event for {string} is emitted")]
async fn one_execute_event(world: &mut BridgeWorld, id: String) {
    assert_eq!(world.execute_events(), vec![id]);
}
