//! Transformers for `/bgp` configuration and neighbors.

use serde::{Deserialize, Serialize};

use super::{request_field, text_or_empty};

/// Wire shape of the BGP process configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BgpConfigWire {
    #[serde(default)]
    pub local_as: Option<u32>,
    #[serde(default)]
    pub router_id: Option<String>,
    #[serde(default)]
    pub keepalive: Option<u16>,
    #[serde(default)]
    pub holdtime: Option<u16>,
    #[serde(default)]
    pub neighbors: Vec<BgpNeighborWire>,
    #[serde(default)]
    pub networks: Vec<String>,
}

/// Wire shape of one BGP neighbor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BgpNeighborWire {
    pub ip_address: String,
    #[serde(default)]
    pub remote_as: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub update_source: Option<String>,
    #[serde(default)]
    pub next_hop_self: bool,
    #[serde(default)]
    pub prefix_list_in: Option<String>,
    #[serde(default)]
    pub prefix_list_out: Option<String>,
    #[serde(default)]
    pub route_map_in: Option<String>,
    #[serde(default)]
    pub route_map_out: Option<String>,
}

/// Normalized BGP process configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BgpConfigUi {
    pub local_as: Option<u32>,
    pub router_id: String,
    pub keepalive: Option<u16>,
    pub holdtime: Option<u16>,
    pub neighbors: Vec<BgpNeighborUi>,
    pub networks: Vec<String>,
}

/// Normalized neighbor row. The neighbor IP is the natural identity;
/// `id` is only a positional display key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BgpNeighborUi {
    pub id: usize,
    pub ip_address: String,
    pub remote_as: Option<u32>,
    pub description: String,
    pub update_source: String,
    pub next_hop_self: bool,
    pub prefix_list_in: String,
    pub prefix_list_out: String,
    pub route_map_in: String,
    pub route_map_out: String,
}

/// Process-level update request; requires a configured local AS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BgpConfigRequestWire {
    pub local_as: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keepalive: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holdtime: Option<u16>,
}

/// Neighbor update request; the neighbor IP travels in the URL path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BgpNeighborUpdateWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_source: Option<String>,
    pub next_hop_self: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_list_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_list_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_map_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_map_out: Option<String>,
}

/// Normalize the BGP configuration document.
pub fn to_ui_model(wire: &BgpConfigWire) -> BgpConfigUi {
    let neighbors = wire
        .neighbors
        .iter()
        .enumerate()
        .map(|(index, neighbor)| neighbor_to_ui(neighbor, index))
        .collect();

    BgpConfigUi {
        local_as: wire.local_as,
        router_id: text_or_empty(wire.router_id.as_ref()),
        keepalive: wire.keepalive,
        holdtime: wire.holdtime,
        neighbors,
        networks: wire.networks.clone(),
    }
}

fn neighbor_to_ui(wire: &BgpNeighborWire, index: usize) -> BgpNeighborUi {
    BgpNeighborUi {
        id: index + 1,
        ip_address: wire.ip_address.clone(),
        remote_as: wire.remote_as,
        description: text_or_empty(wire.description.as_ref()),
        update_source: text_or_empty(wire.update_source.as_ref()),
        next_hop_self: wire.next_hop_self,
        prefix_list_in: text_or_empty(wire.prefix_list_in.as_ref()),
        prefix_list_out: text_or_empty(wire.prefix_list_out.as_ref()),
        route_map_in: text_or_empty(wire.route_map_in.as_ref()),
        route_map_out: text_or_empty(wire.route_map_out.as_ref()),
    }
}

/// Build the process-level request. `None` until a local AS is set: the
/// backend treats `local_as` as required and the form blocks submission
/// without it.
pub fn to_wire_request(ui: &BgpConfigUi) -> Option<BgpConfigRequestWire> {
    let local_as = ui.local_as?;
    Some(BgpConfigRequestWire {
        local_as,
        router_id: request_field(&ui.router_id),
        keepalive: ui.keepalive,
        holdtime: ui.holdtime,
    })
}

/// Build the neighbor update request for the mutable neighbor fields.
pub fn neighbor_to_wire_request(ui: &BgpNeighborUi) -> BgpNeighborUpdateWire {
    BgpNeighborUpdateWire {
        description: request_field(&ui.description),
        update_source: request_field(&ui.update_source),
        next_hop_self: ui.next_hop_self,
        prefix_list_in: request_field(&ui.prefix_list_in),
        prefix_list_out: request_field(&ui.prefix_list_out),
        route_map_in: request_field(&ui.route_map_in),
        route_map_out: request_field(&ui.route_map_out),
    }
}
