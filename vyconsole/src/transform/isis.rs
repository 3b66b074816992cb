//! Transformers for `/isis` configuration.

use serde::{Deserialize, Serialize};

use super::{request_field, text_or_empty};

/// Wire shape of the IS-IS process configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IsisConfigWire {
    #[serde(default)]
    pub net: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub metric_style: Option<String>,
    #[serde(default)]
    pub purge_originator: bool,
    #[serde(default)]
    pub set_overload_bit: bool,
    #[serde(default)]
    pub spf_interval: Option<u32>,
    #[serde(default)]
    pub interfaces: Vec<IsisInterfaceWire>,
    #[serde(default)]
    pub redistribute: Vec<IsisRedistributeWire>,
}

/// Wire shape of one IS-IS-enabled interface.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IsisInterfaceWire {
    pub interface: String,
    #[serde(default)]
    pub circuit_type: Option<String>,
    #[serde(default)]
    pub hello_interval: Option<u32>,
    #[serde(default)]
    pub hello_multiplier: Option<u32>,
    #[serde(default)]
    pub metric: Option<u32>,
    #[serde(default)]
    pub passive: bool,
    #[serde(default)]
    pub priority: Option<u32>,
}

/// Wire shape of one redistribution entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IsisRedistributeWire {
    pub source: String,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub route_map: Option<String>,
}

/// IS-IS level, narrowed from the backend's `level-1`/`level-2`/
/// `level-1-2` strings. Unknown values render as `Level1And2`, the VyOS
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IsisLevel {
    #[serde(rename = "level-1")]
    Level1,
    #[serde(rename = "level-2")]
    Level2,
    #[serde(rename = "level-1-2")]
    Level1And2,
}

impl IsisLevel {
    fn from_wire(raw: &str) -> Self {
        match raw {
            "level-1" => IsisLevel::Level1,
            "level-2" => IsisLevel::Level2,
            _ => IsisLevel::Level1And2,
        }
    }

    fn as_wire(self) -> &'static str {
        match self {
            IsisLevel::Level1 => "level-1",
            IsisLevel::Level2 => "level-2",
            IsisLevel::Level1And2 => "level-1-2",
        }
    }
}

/// Normalized IS-IS process configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsisConfigUi {
    pub net: String,
    pub level: IsisLevel,
    pub metric_style: String,
    pub purge_originator: bool,
    pub set_overload_bit: bool,
    pub spf_interval: Option<u32>,
    pub interfaces: Vec<IsisInterfaceUi>,
    pub redistribute: Vec<IsisRedistributeUi>,
}

/// Normalized IS-IS interface row, keyed by the interface name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsisInterfaceUi {
    pub interface: String,
    pub circuit_type: IsisLevel,
    pub hello_interval: Option<u32>,
    pub hello_multiplier: Option<u32>,
    pub metric: Option<u32>,
    pub passive: bool,
    pub priority: Option<u32>,
}

/// Normalized redistribution row; `id` is positional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsisRedistributeUi {
    pub id: usize,
    pub source: String,
    pub level: IsisLevel,
    pub route_map: String,
}

/// Process-level update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsisGlobalRequestWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<String>,
    pub level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_style: Option<String>,
    pub purge_originator: bool,
    pub set_overload_bit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spf_interval: Option<u32>,
}

/// Per-interface update request; the interface name travels in the URL
/// path for updates and in the body for adds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsisInterfaceRequestWire {
    pub interface: String,
    pub circuit_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hello_interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hello_multiplier: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<u32>,
    pub passive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

/// Normalize the IS-IS configuration document.
pub fn to_ui_model(wire: &IsisConfigWire) -> IsisConfigUi {
    let interfaces = wire
        .interfaces
        .iter()
        .map(|iface| IsisInterfaceUi {
            interface: iface.interface.clone(),
            circuit_type: IsisLevel::from_wire(iface.circuit_type.as_deref().unwrap_or("")),
            hello_interval: iface.hello_interval,
            hello_multiplier: iface.hello_multiplier,
            metric: iface.metric,
            passive: iface.passive,
            priority: iface.priority,
        })
        .collect();

    let redistribute = wire
        .redistribute
        .iter()
        .enumerate()
        .map(|(index, entry)| IsisRedistributeUi {
            id: index + 1,
            source: entry.source.clone(),
            level: IsisLevel::from_wire(entry.level.as_deref().unwrap_or("")),
            route_map: text_or_empty(entry.route_map.as_ref()),
        })
        .collect();

    IsisConfigUi {
        net: text_or_empty(wire.net.as_ref()),
        level: IsisLevel::from_wire(wire.level.as_deref().unwrap_or("")),
        metric_style: text_or_empty(wire.metric_style.as_ref()),
        purge_originator: wire.purge_originator,
        set_overload_bit: wire.set_overload_bit,
        spf_interval: wire.spf_interval,
        interfaces,
        redistribute,
    }
}

/// Build the process-level update request.
pub fn to_wire_request(ui: &IsisConfigUi) -> IsisGlobalRequestWire {
    IsisGlobalRequestWire {
        net: request_field(&ui.net),
        level: ui.level.as_wire(),
        metric_style: request_field(&ui.metric_style),
        purge_originator: ui.purge_originator,
        set_overload_bit: ui.set_overload_bit,
        spf_interval: ui.spf_interval,
    }
}

/// Build the per-interface request.
pub fn interface_to_wire_request(ui: &IsisInterfaceUi) -> IsisInterfaceRequestWire {
    IsisInterfaceRequestWire {
        interface: ui.interface.clone(),
        circuit_type: ui.circuit_type.as_wire(),
        hello_interval: ui.hello_interval,
        hello_multiplier: ui.hello_multiplier,
        metric: ui.metric,
        passive: ui.passive,
        priority: ui.priority,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        interface_to_wire_request, to_ui_model, to_wire_request, IsisConfigWire,
        IsisInterfaceWire, IsisLevel, IsisRedistributeWire,
    };
    use pretty_assertions::assert_eq;

    fn sample_wire() -> IsisConfigWire {
        IsisConfigWire {
            net: Some("49.0001.1921.6800.1001.00".to_string()),
            level: Some("level-2".to_string()),
            metric_style: Some("wide".to_string()),
            interfaces: vec![IsisInterfaceWire {
                interface: "eth1".to_string(),
                circuit_type: Some("level-2".to_string()),
                metric: Some(10),
                passive: false,
                ..IsisInterfaceWire::default()
            }],
            redistribute: vec![IsisRedistributeWire {
                source: "connected".to_string(),
                level: Some("level-2".to_string()),
                route_map: None,
            }],
            ..IsisConfigWire::default()
        }
    }

    #[test]
    fn narrows_levels_and_defaults_unknown() {
        let ui = to_ui_model(&sample_wire());
        assert_eq!(ui.level, IsisLevel::Level2);
        assert_eq!(ui.interfaces[0].circuit_type, IsisLevel::Level2);
        assert_eq!(ui.redistribute[0].id, 1);

        let unknown = IsisConfigWire {
            level: Some("level-3".to_string()),
            ..IsisConfigWire::default()
        };
        assert_eq!(to_ui_model(&unknown).level, IsisLevel::Level1And2);
    }

    #[test]
    fn global_request_round_trips_the_net() {
        let ui = to_ui_model(&sample_wire());
        let request = to_wire_request(&ui);
        assert_eq!(request.net.as_deref(), Some("49.0001.1921.6800.1001.00"));
        assert_eq!(request.level, "level-2");
        assert_eq!(request.metric_style.as_deref(), Some("wide"));
    }

    #[test]
    fn interface_request_carries_circuit_type_string() {
        let ui = to_ui_model(&sample_wire());
        let request = interface_to_wire_request(&ui.interfaces[0]);
        assert_eq!(request.interface, "eth1");
        assert_eq!(request.circuit_type, "level-2");
        assert_eq!(request.metric, Some(10));
    }
}
