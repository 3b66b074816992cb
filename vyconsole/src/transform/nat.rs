//! Transformers for `/firewall/nat/rules` records. Unlike filter rules,
//! NAT requests keep ports as strings because the backend accepts port
//! ranges here.

use serde::{Deserialize, Serialize};

use super::{request_field, text_or_empty};

/// Wire shape of one NAT rule.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NatRuleWire {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub sequence: u32,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub source_address: Option<String>,
    #[serde(default)]
    pub source_port: Option<String>,
    #[serde(default)]
    pub destination_address: Option<String>,
    #[serde(default)]
    pub destination_port: Option<String>,
    #[serde(default)]
    pub inbound_interface: Option<String>,
    #[serde(default)]
    pub outbound_interface: Option<String>,
    #[serde(default)]
    pub translation_address: Option<String>,
    #[serde(default)]
    pub translation_port: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub log: bool,
}

fn default_enabled() -> bool {
    true
}

/// NAT rule family; unknown values narrow to `Source`, the common case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NatKind {
    Source,
    Destination,
}

impl NatKind {
    fn from_wire(raw: &str) -> Self {
        match raw {
            "destination" => NatKind::Destination,
            _ => NatKind::Source,
        }
    }

    fn as_wire(self) -> &'static str {
        match self {
            NatKind::Source => "source",
            NatKind::Destination => "destination",
        }
    }
}

/// Normalized NAT rule; the backend's string `id` is the natural
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NatRuleUi {
    pub id: String,
    pub name: String,
    pub kind: NatKind,
    pub sequence: u32,
    pub order: u32,
    pub description: String,
    pub enabled: bool,
    pub source_address: String,
    pub source_port: String,
    pub destination_address: String,
    pub destination_port: String,
    pub inbound_interface: String,
    pub outbound_interface: String,
    pub translation_address: String,
    pub translation_port: String,
    pub protocol: String,
    pub log: bool,
}

/// Create/update request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NatRuleRequestWire {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub sequence: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    pub log: bool,
}

/// Normalize one NAT rule record.
pub fn to_ui_model(wire: &NatRuleWire) -> NatRuleUi {
    NatRuleUi {
        id: wire.id.clone(),
        name: wire.name.clone(),
        kind: NatKind::from_wire(wire.kind.as_deref().unwrap_or("source")),
        sequence: wire.sequence,
        order: wire.order,
        description: text_or_empty(wire.description.as_ref()),
        enabled: wire.enabled,
        source_address: text_or_empty(wire.source_address.as_ref()),
        source_port: text_or_empty(wire.source_port.as_ref()),
        destination_address: text_or_empty(wire.destination_address.as_ref()),
        destination_port: text_or_empty(wire.destination_port.as_ref()),
        inbound_interface: text_or_empty(wire.inbound_interface.as_ref()),
        outbound_interface: text_or_empty(wire.outbound_interface.as_ref()),
        translation_address: text_or_empty(wire.translation_address.as_ref()),
        translation_port: text_or_empty(wire.translation_port.as_ref()),
        protocol: text_or_empty(wire.protocol.as_ref()),
        log: wire.log,
    }
}

/// Build the request body; every empty optional field is omitted.
pub fn to_wire_request(ui: &NatRuleUi) -> NatRuleRequestWire {
    NatRuleRequestWire {
        name: ui.name.clone(),
        kind: ui.kind.as_wire(),
        sequence: ui.sequence,
        description: request_field(&ui.description),
        enabled: ui.enabled,
        source_address: request_field(&ui.source_address),
        source_port: request_field(&ui.source_port),
        destination_address: request_field(&ui.destination_address),
        destination_port: request_field(&ui.destination_port),
        inbound_interface: request_field(&ui.inbound_interface),
        outbound_interface: request_field(&ui.outbound_interface),
        translation_address: request_field(&ui.translation_address),
        translation_port: request_field(&ui.translation_port),
        protocol: request_field(&ui.protocol),
        log: ui.log,
    }
}
