//! Transformers for `/network/routes` records.

use serde::{Deserialize, Serialize};

use super::{request_field, text_or_empty};

/// Wire shape of one configured route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteWire {
    pub destination: String,
    #[serde(default)]
    pub next_hop: Option<String>,
    #[serde(default)]
    pub interface: Option<String>,
    #[serde(default = "default_distance")]
    pub distance: u32,
    #[serde(default)]
    pub metric: u32,
    #[serde(default)]
    pub route_type: Option<String>,
}

fn default_distance() -> u32 {
    1
}

/// Wire shape of one routing-table entry from the route summary endpoint,
/// with the FRR status flags the backend parses out of `show ip route`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteSummaryWire {
    pub destination: String,
    #[serde(default)]
    pub next_hop: Option<String>,
    #[serde(default)]
    pub interface: Option<String>,
    #[serde(default)]
    pub route_type: Option<String>,
    #[serde(default)]
    pub route_source: Option<String>,
    #[serde(default)]
    pub is_selected: bool,
    #[serde(default)]
    pub is_fib: bool,
    #[serde(default)]
    pub is_queued: bool,
    #[serde(default)]
    pub is_rejected: bool,
    #[serde(default)]
    pub is_backup: bool,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default = "default_distance")]
    pub distance: u32,
    #[serde(default)]
    pub metric: u32,
    #[serde(default)]
    pub status: Option<String>,
}

/// Closed set of route origins rendered by the routing table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteOrigin {
    Static,
    Connected,
    Kernel,
    Ospf,
    Isis,
    Bgp,
    Other,
}

impl RouteOrigin {
    fn from_wire(raw: &str) -> Self {
        match raw {
            "static" => RouteOrigin::Static,
            "connected" => RouteOrigin::Connected,
            "kernel" => RouteOrigin::Kernel,
            "ospf" => RouteOrigin::Ospf,
            "isis" => RouteOrigin::Isis,
            "bgp" => RouteOrigin::Bgp,
            _ => RouteOrigin::Other,
        }
    }
}

/// Normalized route shape for the static-routes table. Routes have no
/// natural primary key on the wire, so `id` is the positional index + 1;
/// the (destination, gateway) pair is the real identity for edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteUi {
    pub id: usize,
    pub destination: String,
    pub gateway: String,
    pub interface: String,
    pub distance: u32,
    pub metric: u32,
    pub is_static: bool,
    pub is_connected: bool,
}

/// Normalized routing-table entry for the route summary view. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummaryUi {
    pub id: usize,
    pub destination: String,
    pub gateway: String,
    pub interface: String,
    pub origin: RouteOrigin,
    pub source: String,
    pub is_selected: bool,
    pub is_fib: bool,
    pub is_queued: bool,
    pub is_rejected: bool,
    pub is_backup: bool,
    pub age: String,
    pub distance: u32,
    pub metric: u32,
    pub status: String,
}

/// Create/update request body for a static route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRequestWire {
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_hop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    pub distance: u32,
    pub metric: u32,
}

/// Normalize one route record; `index` is its position in the fetched
/// collection.
pub fn to_ui_model(wire: &RouteWire, index: usize) -> RouteUi {
    let route_type = wire.route_type.as_deref().unwrap_or("static");
    RouteUi {
        id: index + 1,
        destination: wire.destination.clone(),
        gateway: text_or_empty(wire.next_hop.as_ref()),
        interface: text_or_empty(wire.interface.as_ref()),
        distance: wire.distance,
        metric: wire.metric,
        is_static: route_type == "static",
        is_connected: route_type == "connected",
    }
}

/// Normalize one routing-table entry from the summary endpoint.
pub fn summary_to_ui_model(wire: &RouteSummaryWire, index: usize) -> RouteSummaryUi {
    RouteSummaryUi {
        id: index + 1,
        destination: wire.destination.clone(),
        gateway: text_or_empty(wire.next_hop.as_ref()),
        interface: text_or_empty(wire.interface.as_ref()),
        origin: RouteOrigin::from_wire(wire.route_type.as_deref().unwrap_or("")),
        source: text_or_empty(wire.route_source.as_ref()),
        is_selected: wire.is_selected,
        is_fib: wire.is_fib,
        is_queued: wire.is_queued,
        is_rejected: wire.is_rejected,
        is_backup: wire.is_backup,
        age: text_or_empty(wire.age.as_ref()),
        distance: wire.distance,
        metric: wire.metric,
        status: wire
            .status
            .clone()
            .unwrap_or_else(|| "unknown".to_string()),
    }
}

/// Build the create/update request; an empty gateway is omitted so
/// interface-only routes do not send a blank next hop.
pub fn to_wire_request(ui: &RouteUi) -> RouteRequestWire {
    RouteRequestWire {
        destination: ui.destination.clone(),
        next_hop: request_field(&ui.gateway),
        interface: request_field(&ui.interface),
        distance: ui.distance,
        metric: ui.metric,
    }
}
