//! # Shell Proxy
//!
//! Lets the remote side place one of its widgets into a named area of the
//! front-end shell. Placement itself is delegated to an injected [`Shell`].

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::bridge::events::InboundEnvelope;

/// Prefix of serialized widget model references
pub const WIDGET_REF_PREFIX: &str = "IPY_MODEL_";

/// Named regions of the front-end shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellArea {
    Main,
    Left,
    Right,
    Top,
    Bottom,
    Header,
    Menu,
    Down,
}

impl fmt::Display for ShellArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Main => "main",
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Header => "header",
            Self::Menu => "menu",
            Self::Down => "down",
        };
        f.write_str(name)
    }
}

/// Widget placement capability of the front-end
pub trait Shell: Send {
    fn add(&mut self, widget_id: &str, area: ShellArea, args: &Value) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub widget_id: String,
    pub area: ShellArea,
    pub args: Value,
}

/// Shell that only records placements
#[derive(Debug, Default)]
pub struct InMemoryShell {
    placements: Vec<Placement>,
}

impl InMemoryShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }
}

impl Shell for InMemoryShell {
    fn add(&mut self, widget_id: &str, area: ShellArea, args: &Value) -> Result<()> {
        tracing::info!("Placing widget '{}' in the {} area", widget_id, area);
        self.placements.push(Placement {
            widget_id: widget_id.to_string(),
            area,
            args: args.clone(),
        });
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddPayload {
    serialized_widget: String,
    area: ShellArea,
    #[serde(default)]
    args: Option<Value>,
}

/// Handles messages addressed to the shell model
#[derive(Debug)]
pub struct ShellProxy<S: Shell> {
    shell: S,
}

impl<S: Shell> ShellProxy<S> {
    pub fn new(shell: S) -> Self {
        Self { shell }
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn handle_message(&mut self, envelope: &InboundEnvelope) -> Result<()> {
        match envelope.func.as_str() {
            "add" => {
                let payload: AddPayload = serde_json::from_value(envelope.payload.clone())?;
                let widget_id = parse_widget_ref(&payload.serialized_widget)?;
                let args = payload.args.unwrap_or_else(|| Value::Object(Map::new()));
                self.shell.add(widget_id, payload.area, &args)
            }
            other => {
                tracing::debug!("Ignoring unknown shell function '{}'", other);
                Ok(())
            }
        }
    }
}

/// Extract the model id from an `IPY_MODEL_<id>` reference
pub fn parse_widget_ref(serialized: &str) -> Result<&str> {
    match serialized.strip_prefix(WIDGET_REF_PREFIX) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(anyhow!("Invalid widget reference: {serialized}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::events::ModelTarget;
    use serde_json::json;

    fn add_envelope(payload: Value) -> InboundEnvelope {
        InboundEnvelope::new(ModelTarget::Shell, "add", payload)
    }

    #[test]
    fn shell_proxy_should_place_referenced_widget() {
        let mut proxy = ShellProxy::new(InMemoryShell::new());

        proxy
            .handle_message(&add_envelope(json!({
                "serializedWidget": "IPY_MODEL_abc123",
                "area": "left",
                "args": { "rank": 1000 }
            })))
            .unwrap();

        assert_eq!(
            proxy.shell().placements(),
            &[Placement {
                widget_id: "abc123".to_string(),
                area: ShellArea::Left,
                args: json!({ "rank": 1000 }),
            }]
        );
    }

    #[test]
    fn shell_proxy_should_default_missing_args_to_empty_object() {
        let mut proxy = ShellProxy::new(InMemoryShell::new());

        proxy
            .handle_message(&add_envelope(json!({
                "serializedWidget": "IPY_MODEL_w1",
                "area": "main"
            })))
            .unwrap();

        assert_eq!(proxy.shell().placements()[0].args, json!({}));
    }

    #[test]
    fn shell_proxy_should_reject_unknown_area() {
        let mut proxy = ShellProxy::new(InMemoryShell::new());

        let result = proxy.handle_message(&add_envelope(json!({
            "serializedWidget": "IPY_MODEL_w1",
            "area": "sidebar"
        })));

        assert!(result.is_err());
        assert!(proxy.shell().placements().is_empty());
    }

    #[test]
    fn parse_widget_ref_should_require_prefix_and_id() {
        assert_eq!(parse_widget_ref("IPY_MODEL_x").unwrap(), "x");
        assert!(parse_widget_ref("IPY_MODEL_").is_err());
        assert!(parse_widget_ref("x").is_err());
    }
}
