//! Wire↔UI transformers, one module per backend entity type.
//!
//! Each module defines the typed wire shapes for one family of REST
//! endpoints (backend field names, serde), the normalized UI shapes the
//! presentation layer renders, and the pure mappers between them:
//!
//! - `to_ui_model(wire, index)` never fails. Missing optional fields get
//!   documented defaults and unknown enum values narrow to a safe member
//!   of a closed set. Entity types without a natural primary key get a
//!   synthetic positional `id = index + 1`; it is a display key only and
//!   does not survive a refetch if the backend reorders.
//! - `to_wire_request(ui)` covers only mutable fields. Empty optional UI
//!   fields are omitted from the request body, never sent as `""` or `0`,
//!   so a save cannot accidentally clear a value the form never surfaced.
//!
//! Transformers do not validate formats; callers run [`crate::validate`]
//! on form values before submission.

pub mod arp;
pub mod bgp;
pub mod dns;
pub mod firewall;
pub mod interfaces;
pub mod isis;
pub mod logs;
pub mod nat;
pub mod routes;
pub mod users;
pub mod wireguard;

/// Split an `address/prefix` string into its parts, defaulting the prefix
/// when the suffix is missing or malformed.
pub(crate) fn split_cidr(raw: &str, default_prefix: u8) -> (String, u8) {
    match raw.split_once('/') {
        Some((addr, suffix)) => {
            let prefix = suffix.trim().parse::<u8>().unwrap_or(default_prefix);
            (addr.trim().to_string(), prefix)
        }
        None => (raw.trim().to_string(), default_prefix),
    }
}

/// Owned, trimmed copy of an optional wire string; empty when absent.
pub(crate) fn text_or_empty(value: Option<&String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// `Some` only for non-empty trimmed text; request bodies drop the rest.
pub(crate) fn request_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
