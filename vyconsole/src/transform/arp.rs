//! Transformers for `/network/arp-table` records. Read-only: the console
//! can clear the table but never edits individual entries.

use serde::{Deserialize, Serialize};

use super::text_or_empty;
use crate::validate::normalize_mac;

/// Wire shape of one ARP/neighbor table entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArpEntryWire {
    pub ip_address: String,
    pub mac_address: String,
    pub interface: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Closed set of kernel neighbor states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighborState {
    Reachable,
    Stale,
    Delay,
    Probe,
    Failed,
    Permanent,
}

impl NeighborState {
    fn from_wire(raw: &str) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "STALE" => NeighborState::Stale,
            "DELAY" => NeighborState::Delay,
            "PROBE" => NeighborState::Probe,
            "FAILED" => NeighborState::Failed,
            "PERMANENT" => NeighborState::Permanent,
            // Backend default; unknown kernel states render as reachable
            // rather than failing the table.
            _ => NeighborState::Reachable,
        }
    }
}

/// Normalized ARP entry; `id` is positional, the IP address is the real
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArpEntryUi {
    pub id: usize,
    pub ip_address: String,
    pub mac: String,
    pub interface: String,
    pub age: Option<u32>,
    pub state: NeighborState,
}

/// Normalize one ARP entry; the MAC is canonicalized for display.
pub fn to_ui_model(wire: &ArpEntryWire, index: usize) -> ArpEntryUi {
    ArpEntryUi {
        id: index + 1,
        ip_address: wire.ip_address.clone(),
        mac: normalize_mac(&wire.mac_address),
        interface: wire.interface.clone(),
        age: wire.age,
        state: NeighborState::from_wire(&text_or_empty(wire.state.as_ref())),
    }
}

#[cfg(test)]
mod tests {
    use super::{to_ui_model, ArpEntryWire, NeighborState};
    use pretty_assertions::assert_eq;

    #[test]
    fn normalizes_mac_and_state() {
        let wire = ArpEntryWire {
            ip_address: "192.168.1.10".to_string(),
            mac_address: "aa-bb-cc-dd-ee-ff".to_string(),
            interface: "eth0".to_string(),
            age: Some(120),
            state: Some("stale".to_string()),
        };

        let ui = to_ui_model(&wire, 0);
        assert_eq!(ui.id, 1);
        assert_eq!(ui.mac, "AA:BB:CC:DD:EE:FF");
        assert_eq!(ui.state, NeighborState::Stale);
    }

    #[test]
    fn missing_or_unknown_state_defaults_to_reachable() {
        let wire = ArpEntryWire {
            ip_address: "10.0.0.2".to_string(),
            mac_address: "00:00:00:00:00:01".to_string(),
            interface: "eth1".to_string(),
            age: None,
            state: Some("NOARP".to_string()),
        };
        assert_eq!(to_ui_model(&wire, 3).state, NeighborState::Reachable);
        assert_eq!(to_ui_model(&wire, 3).id, 4);

        let bare = ArpEntryWire {
            ip_address: "10.0.0.3".to_string(),
            mac_address: String::new(),
            interface: "eth1".to_string(),
            ..ArpEntryWire::default()
        };
        assert_eq!(to_ui_model(&bare, 0).state, NeighborState::Reachable);
        assert_eq!(to_ui_model(&bare, 0).mac, "");
    }
}
