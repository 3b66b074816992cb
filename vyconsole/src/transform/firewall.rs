//! Transformers for `/firewall/rules` records.
//!
//! The backend is asymmetric here: responses carry `source`/`destination`
//! and string ports, while create/update requests expect
//! `source_address`/`destination_address` and integer ports. The UI model
//! keeps the response spelling and the request builder does the renaming
//! and coercion.

use serde::{Deserialize, Serialize};

use super::{request_field, text_or_empty};

/// Wire shape of one firewall rule as returned by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FirewallRuleWire {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub sequence: u32,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub source_port: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub destination_port: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub log: bool,
    #[serde(default)]
    pub comment: Option<String>,
}

fn default_enabled() -> bool {
    true
}

/// Traffic direction a rule set applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleDirection {
    In,
    Out,
    Local,
}

impl RuleDirection {
    fn from_wire(raw: &str) -> Self {
        match raw {
            "out" => RuleDirection::Out,
            "local" => RuleDirection::Local,
            _ => RuleDirection::In,
        }
    }

    fn as_wire(self) -> &'static str {
        match self {
            RuleDirection::In => "in",
            RuleDirection::Out => "out",
            RuleDirection::Local => "local",
        }
    }
}

/// Rule verdict; unknown backend values narrow to `Drop`, the safe
/// reading for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    Accept,
    Drop,
    Reject,
}

impl RuleAction {
    fn from_wire(raw: &str) -> Self {
        match raw {
            "accept" => RuleAction::Accept,
            "reject" => RuleAction::Reject,
            _ => RuleAction::Drop,
        }
    }

    fn as_wire(self) -> &'static str {
        match self {
            RuleAction::Accept => "accept",
            RuleAction::Drop => "drop",
            RuleAction::Reject => "reject",
        }
    }
}

/// Normalized firewall rule; the backend's string `id` is the natural
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FirewallRuleUi {
    pub id: String,
    pub name: String,
    pub direction: RuleDirection,
    pub action: RuleAction,
    pub sequence: u32,
    pub order: u32,
    pub description: String,
    pub enabled: bool,
    pub source: String,
    pub source_port: String,
    pub destination: String,
    pub destination_port: String,
    pub protocol: String,
    pub log: bool,
    pub comment: String,
}

/// Create/update request body, in the request schema's field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FirewallRuleRequestWire {
    pub name: String,
    pub direction: &'static str,
    pub action: &'static str,
    pub sequence: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    pub log: bool,
}

/// Normalize one firewall rule record.
pub fn to_ui_model(wire: &FirewallRuleWire) -> FirewallRuleUi {
    FirewallRuleUi {
        id: wire.id.clone(),
        name: wire.name.clone(),
        direction: RuleDirection::from_wire(wire.direction.as_deref().unwrap_or("in")),
        action: RuleAction::from_wire(wire.action.as_deref().unwrap_or("drop")),
        sequence: wire.sequence,
        order: wire.order,
        description: text_or_empty(wire.description.as_ref()),
        enabled: wire.enabled,
        source: text_or_empty(wire.source.as_ref()),
        source_port: text_or_empty(wire.source_port.as_ref()),
        destination: text_or_empty(wire.destination.as_ref()),
        destination_port: text_or_empty(wire.destination_port.as_ref()),
        protocol: wire
            .protocol
            .clone()
            .unwrap_or_else(|| "any".to_string()),
        log: wire.log,
        comment: text_or_empty(wire.comment.as_ref()),
    }
}

/// Build the request body. Ports are coerced from the form's strings to
/// the integers the request schema expects; empty or non-numeric ports
/// are omitted. The synthetic `order` and the backend-assigned `id` are
/// write-excluded.
pub fn to_wire_request(ui: &FirewallRuleUi) -> FirewallRuleRequestWire {
    FirewallRuleRequestWire {
        name: ui.name.clone(),
        direction: ui.direction.as_wire(),
        action: ui.action.as_wire(),
        sequence: ui.sequence,
        description: request_field(&ui.description),
        enabled: ui.enabled,
        source_address: request_field(&ui.source),
        source_port: coerce_port(&ui.source_port),
        destination_address: request_field(&ui.destination),
        destination_port: coerce_port(&ui.destination_port),
        protocol: request_field(&ui.protocol),
        log: ui.log,
    }
}

fn coerce_port(value: &str) -> Option<u16> {
    value.trim().parse::<u16>().ok().filter(|port| *port >= 1)
}

#[cfg(test)]
mod tests {
    use super::{to_ui_model, to_wire_request, FirewallRuleWire, RuleAction, RuleDirection};
    use pretty_assertions::assert_eq;

    fn sample_wire() -> FirewallRuleWire {
        FirewallRuleWire {
            id: "wan-in-10".to_string(),
            name: "wan-in".to_string(),
            direction: Some("in".to_string()),
            action: Some("accept".to_string()),
            sequence: 10,
            order: 1,
            enabled: true,
            source: Some("203.0.113.0/24".to_string()),
            source_port: None,
            destination: Some("192.168.1.10".to_string()),
            destination_port: Some("443".to_string()),
            protocol: Some("tcp".to_string()),
            ..FirewallRuleWire::default()
        }
    }

    #[test]
    fn normalizes_a_rule() {
        let ui = to_ui_model(&sample_wire());
        assert_eq!(ui.id, "wan-in-10");
        assert_eq!(ui.direction, RuleDirection::In);
        assert_eq!(ui.action, RuleAction::Accept);
        assert_eq!(ui.destination_port, "443");
        assert_eq!(ui.protocol, "tcp");
    }

    #[test]
    fn unknown_enums_narrow_to_safe_defaults() {
        let wire = FirewallRuleWire {
            id: "r1".to_string(),
            name: "r1".to_string(),
            direction: Some("sideways".to_string()),
            action: Some("quarantine".to_string()),
            ..FirewallRuleWire::default()
        };

        let ui = to_ui_model(&wire);
        assert_eq!(ui.direction, RuleDirection::In);
        assert_eq!(ui.action, RuleAction::Drop);
        assert_eq!(ui.protocol, "any");
    }

    #[test]
    fn request_renames_addresses_and_coerces_ports() {
        let request = to_wire_request(&to_ui_model(&sample_wire()));

        assert_eq!(request.source_address.as_deref(), Some("203.0.113.0/24"));
        assert_eq!(request.destination_address.as_deref(), Some("192.168.1.10"));
        assert_eq!(request.destination_port, Some(443));
        assert_eq!(request.source_port, None);

        let body = serde_json::to_string(&request).expect("serialize");
        assert!(body.contains("\"source_address\""));
        assert!(!body.contains("\"source\":"));
        assert!(!body.contains("source_port"));
    }

    #[test]
    fn non_numeric_port_is_omitted_not_zeroed() {
        let mut ui = to_ui_model(&sample_wire());
        ui.destination_port = "https".to_string();

        let request = to_wire_request(&ui);
        assert_eq!(request.destination_port, None);
    }
}
