//! Transformers for `/network/interfaces` records.

use serde::{Deserialize, Serialize};

use super::{request_field, split_cidr, text_or_empty};
use crate::validate::normalize_mac;

/// Wire shape of one interface as returned by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterfaceWire {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub mtu: Option<u32>,
    #[serde(default)]
    pub mac_address: Option<String>,
    #[serde(default)]
    pub ip_addresses: Option<Vec<IpAddressWire>>,
    #[serde(default)]
    pub vrf: Option<String>,
    #[serde(default)]
    pub speed: Option<String>,
    #[serde(default)]
    pub duplex: Option<String>,
    #[serde(default)]
    pub parent_interface: Option<String>,
    #[serde(default)]
    pub vlan_id: Option<u16>,
}

/// Wire shape of one address assignment nested in an interface record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IpAddressWire {
    pub address: String,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub vrf: Option<String>,
}

/// Closed set of interface types the console renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceKind {
    Ethernet,
    Loopback,
    Bridge,
    Bonding,
    Vlan,
    Pppoe,
    Wireguard,
    Other,
}

impl InterfaceKind {
    fn from_wire(raw: &str) -> Self {
        match raw {
            "ethernet" => InterfaceKind::Ethernet,
            "loopback" => InterfaceKind::Loopback,
            "bridge" => InterfaceKind::Bridge,
            "bonding" => InterfaceKind::Bonding,
            "vlan" => InterfaceKind::Vlan,
            "pppoe" => InterfaceKind::Pppoe,
            "wireguard" => InterfaceKind::Wireguard,
            _ => InterfaceKind::Other,
        }
    }

    fn as_wire(self) -> &'static str {
        match self {
            InterfaceKind::Ethernet => "ethernet",
            InterfaceKind::Loopback => "loopback",
            InterfaceKind::Bridge => "bridge",
            InterfaceKind::Bonding => "bonding",
            InterfaceKind::Vlan => "vlan",
            InterfaceKind::Pppoe => "pppoe",
            InterfaceKind::Wireguard => "wireguard",
            InterfaceKind::Other => "ethernet",
        }
    }
}

/// Link state; anything the backend reports that is not "up" renders as
/// down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkState {
    Up,
    Down,
}

/// One `address` + `cidr` pair split out for the address editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpAssignmentUi {
    pub address: String,
    pub cidr: u8,
}

/// Normalized interface shape consumed by the interfaces table and form.
/// Identity is the natural `name` key; interfaces never get a synthetic
/// positional id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceUi {
    pub name: String,
    pub kind: InterfaceKind,
    pub description: String,
    pub state: LinkState,
    pub mtu: u32,
    pub mac: String,
    pub addresses: Vec<IpAssignmentUi>,
    pub vrf: String,
    pub speed: String,
    pub duplex: String,
    pub parent: String,
    pub vlan_id: Option<u16>,
}

/// Update request body; the interface name travels in the URL path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceUpdateWire {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub mtu: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vrf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<u16>,
}

/// Normalize one interface wire record.
///
/// Addresses arrive as combined `a.b.c.d/nn` strings and are split for
/// the editor, defaulting to /24 when the suffix is missing. The MAC is
/// canonicalized to uppercase colon form.
pub fn to_ui_model(wire: &InterfaceWire) -> InterfaceUi {
    let addresses = wire
        .ip_addresses
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|assignment| {
            let (address, cidr) = split_cidr(&assignment.address, 24);
            IpAssignmentUi { address, cidr }
        })
        .collect();

    InterfaceUi {
        name: wire.name.clone(),
        kind: InterfaceKind::from_wire(wire.kind.as_deref().unwrap_or("ethernet")),
        description: text_or_empty(wire.description.as_ref()),
        state: if wire.status.as_deref() == Some("up") {
            LinkState::Up
        } else {
            LinkState::Down
        },
        mtu: wire.mtu.unwrap_or(1500),
        mac: normalize_mac(&text_or_empty(wire.mac_address.as_ref())),
        addresses,
        vrf: text_or_empty(wire.vrf.as_ref()),
        speed: text_or_empty(wire.speed.as_ref()),
        duplex: text_or_empty(wire.duplex.as_ref()),
        parent: text_or_empty(wire.parent_interface.as_ref()),
        vlan_id: wire.vlan_id,
    }
}

/// Build the update request for the mutable interface fields.
pub fn to_wire_request(ui: &InterfaceUi) -> InterfaceUpdateWire {
    InterfaceUpdateWire {
        kind: ui.kind.as_wire(),
        description: request_field(&ui.description),
        mtu: ui.mtu,
        vrf: request_field(&ui.vrf),
        parent: request_field(&ui.parent),
        vlan_id: ui.vlan_id,
    }
}
