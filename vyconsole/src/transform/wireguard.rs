//! Transformers for `/vpn/wireguard` interfaces and peers.
//!
//! Peer endpoints arrive combined (`host:port`) but the create request
//! wants `endpoint` and `endpoint_port` separately; the request builder
//! does the split, including bracketed IPv6 hosts.

use serde::{Deserialize, Serialize};

use super::{request_field, split_cidr, text_or_empty};

/// Wire shape of one WireGuard interface with its peers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WgInterfaceWire {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub private_key: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default)]
    pub listen_port: Option<u16>,
    #[serde(default = "default_mtu")]
    pub mtu: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub peers: Vec<WgPeerWire>,
}

fn default_mtu() -> u32 {
    1420
}

/// Wire shape of one peer nested in an interface record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WgPeerWire {
    pub name: String,
    pub public_key: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub allowed_ips: Option<String>,
    #[serde(default = "default_keepalive")]
    pub persistent_keepalive: u32,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_keepalive() -> u32 {
    25
}

fn default_enabled() -> bool {
    true
}

/// Normalized WireGuard interface, keyed by its natural `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WgInterfaceUi {
    pub name: String,
    pub address: String,
    pub cidr: u8,
    pub private_key: String,
    pub public_key: String,
    pub listen_port: Option<u16>,
    pub mtu: u32,
    pub description: String,
    pub peers: Vec<WgPeerUi>,
}

/// Normalized peer row; `id` is positional, the public key is the real
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WgPeerUi {
    pub id: usize,
    pub name: String,
    pub public_key: String,
    pub endpoint: String,
    pub allowed_ips: String,
    pub persistent_keepalive: u32,
    pub enabled: bool,
}

/// Interface update request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WgInterfaceUpdateWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen_port: Option<u16>,
    pub mtu: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Peer add request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WgPeerRequestWire {
    pub name: String,
    pub public_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_ips: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_keepalive: Option<u32>,
}

/// Normalize one WireGuard interface record, splitting the tunnel
/// address into `{address, cidr}` with the usual /24 default.
pub fn to_ui_model(wire: &WgInterfaceWire) -> WgInterfaceUi {
    let (address, cidr) = split_cidr(&text_or_empty(wire.address.as_ref()), 24);

    let peers = wire
        .peers
        .iter()
        .enumerate()
        .map(|(index, peer)| WgPeerUi {
            id: index + 1,
            name: peer.name.clone(),
            public_key: peer.public_key.clone(),
            endpoint: text_or_empty(peer.endpoint.as_ref()),
            allowed_ips: text_or_empty(peer.allowed_ips.as_ref()),
            persistent_keepalive: peer.persistent_keepalive,
            enabled: peer.enabled,
        })
        .collect();

    WgInterfaceUi {
        name: wire.name.clone(),
        address,
        cidr,
        private_key: text_or_empty(wire.private_key.as_ref()),
        public_key: text_or_empty(wire.public_key.as_ref()),
        listen_port: wire.listen_port,
        mtu: wire.mtu,
        description: text_or_empty(wire.description.as_ref()),
        peers,
    }
}

/// Build the interface update request; the address is recombined into
/// `addr/cidr` form when one is set.
pub fn to_wire_request(ui: &WgInterfaceUi) -> WgInterfaceUpdateWire {
    let address = if ui.address.is_empty() {
        None
    } else {
        Some(format!("{}/{}", ui.address, ui.cidr))
    };

    WgInterfaceUpdateWire {
        address,
        private_key: request_field(&ui.private_key),
        listen_port: ui.listen_port,
        mtu: ui.mtu,
        description: request_field(&ui.description),
    }
}

/// Build the peer add request, splitting the display endpoint back into
/// host and port.
pub fn peer_to_wire_request(ui: &WgPeerUi) -> WgPeerRequestWire {
    let (endpoint, endpoint_port) = split_endpoint(&ui.endpoint);

    WgPeerRequestWire {
        name: ui.name.clone(),
        public_key: ui.public_key.clone(),
        allowed_ips: request_field(&ui.allowed_ips),
        endpoint,
        endpoint_port,
        persistent_keepalive: if ui.persistent_keepalive == 0 {
            None
        } else {
            Some(ui.persistent_keepalive)
        },
    }
}

/// Split a display endpoint into host and port. Handles `host:port`,
/// `[v6]:port`, bare bracketed or unbracketed IPv6 hosts, and plain
/// hosts without a port.
fn split_endpoint(endpoint: &str) -> (Option<String>, Option<u16>) {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return (None, None);
    }

    if let Some(rest) = endpoint.strip_prefix('[') {
        if let Some((host, tail)) = rest.split_once(']') {
            let port = tail.strip_prefix(':').and_then(|p| p.parse().ok());
            return (Some(host.to_string()), port);
        }
        return (Some(endpoint.to_string()), None);
    }

    // A single colon separates host from port; more than one means a bare
    // IPv6 address with no port.
    if endpoint.matches(':').count() == 1 {
        if let Some((host, port)) = endpoint.split_once(':') {
            if let Ok(port) = port.parse::<u16>() {
                return (Some(host.to_string()), Some(port));
            }
        }
    }

    (Some(endpoint.to_string()), None)
}

#[cfg(test)]
mod tests {
    use super::{
        peer_to_wire_request, to_ui_model, to_wire_request, WgInterfaceWire, WgPeerWire,
    };
    use pretty_assertions::assert_eq;

    fn sample_wire() -> WgInterfaceWire {
        WgInterfaceWire {
            name: "wg0".to_string(),
            address: Some("10.100.0.1/24".to_string()),
            private_key: Some("PRIVKEY".to_string()),
            public_key: Some("PUBKEY".to_string()),
            listen_port: Some(51820),
            mtu: 1420,
            description: Some("site-to-site".to_string()),
            peers: vec![WgPeerWire {
                name: "branch".to_string(),
                public_key: "PEERKEY".to_string(),
                endpoint: Some("203.0.113.7:51820".to_string()),
                allowed_ips: Some("10.100.0.2/32".to_string()),
                persistent_keepalive: 25,
                enabled: true,
            }],
        }
    }

    #[test]
    fn splits_tunnel_address_and_numbers_peers() {
        let ui = to_ui_model(&sample_wire());
        assert_eq!(ui.address, "10.100.0.1");
        assert_eq!(ui.cidr, 24);
        assert_eq!(ui.peers[0].id, 1);
        assert_eq!(ui.peers[0].endpoint, "203.0.113.7:51820");
    }

    #[test]
    fn interface_update_recombines_address() {
        let request = to_wire_request(&to_ui_model(&sample_wire()));
        assert_eq!(request.address.as_deref(), Some("10.100.0.1/24"));
        assert_eq!(request.listen_port, Some(51820));
    }

    #[test]
    fn peer_request_splits_endpoint_host_and_port() {
        let ui = to_ui_model(&sample_wire());
        let request = peer_to_wire_request(&ui.peers[0]);

        assert_eq!(request.endpoint.as_deref(), Some("203.0.113.7"));
        assert_eq!(request.endpoint_port, Some(51820));
        assert_eq!(request.persistent_keepalive, Some(25));
    }

    #[test]
    fn peer_endpoint_split_handles_ipv6_forms() {
        let mut ui = to_ui_model(&sample_wire());

        ui.peers[0].endpoint = "[2001:db8::7]:51820".to_string();
        let request = peer_to_wire_request(&ui.peers[0]);
        assert_eq!(request.endpoint.as_deref(), Some("2001:db8::7"));
        assert_eq!(request.endpoint_port, Some(51820));

        ui.peers[0].endpoint = "2001:db8::7".to_string();
        let request = peer_to_wire_request(&ui.peers[0]);
        assert_eq!(request.endpoint.as_deref(), Some("2001:db8::7"));
        assert_eq!(request.endpoint_port, None);
    }

    #[test]
    fn empty_peer_endpoint_is_omitted() {
        let mut ui = to_ui_model(&sample_wire());
        ui.peers[0].endpoint = String::new();

        let request = peer_to_wire_request(&ui.peers[0]);
        assert_eq!(request.endpoint, None);
        assert_eq!(request.endpoint_port, None);

        let body = serde_json::to_string(&request).expect("serialize");
        assert!(!body.contains("endpoint"));
    }
}
