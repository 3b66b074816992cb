//! Transformers for `/network/dns` configuration.

use serde::{Deserialize, Serialize};

use super::{request_field, text_or_empty};

/// Wire shape of the DNS configuration document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DnsConfigWire {
    #[serde(default)]
    pub domain_name: Option<String>,
    #[serde(default)]
    pub name_servers: Option<Vec<DnsServerWire>>,
}

/// Wire shape of one configured name server.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DnsServerWire {
    pub server: String,
    #[serde(default)]
    pub vrf: Option<String>,
    #[serde(default)]
    pub priority: i32,
}

/// Normalized DNS configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsConfigUi {
    pub domain_name: String,
    pub servers: Vec<DnsServerUi>,
}

/// Normalized name server row; `id` is positional, the address is the
/// real identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsServerUi {
    pub id: usize,
    pub address: String,
    pub vrf: String,
    pub priority: i32,
}

/// Request body for replacing the name-server set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsSetWire {
    pub servers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vrf: Option<String>,
}

/// Normalize the DNS configuration document.
pub fn to_ui_model(wire: &DnsConfigWire) -> DnsConfigUi {
    let servers = wire
        .name_servers
        .as_deref()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, server)| DnsServerUi {
            id: index + 1,
            address: server.server.trim().to_string(),
            vrf: text_or_empty(server.vrf.as_ref()),
            priority: server.priority,
        })
        .collect();

    DnsConfigUi {
        domain_name: text_or_empty(wire.domain_name.as_ref()),
        servers,
    }
}

/// Build the set-servers request. Blank rows from the form are dropped;
/// the VRF is taken from the first server that names one, since the
/// backend applies a single VRF per request.
pub fn to_wire_request(ui: &DnsConfigUi) -> DnsSetWire {
    let servers: Vec<String> = ui
        .servers
        .iter()
        .filter_map(|server| request_field(&server.address))
        .collect();

    let vrf = ui
        .servers
        .iter()
        .find_map(|server| request_field(&server.vrf));

    DnsSetWire { servers, vrf }
}
