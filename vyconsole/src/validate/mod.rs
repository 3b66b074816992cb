//! Format validators for network primitives.
//!
//! All validators are pure `-> bool` functions with the same failure
//! semantics: malformed input returns `false`, never a panic, and the
//! empty string is valid. Absence is not a format error; required-field
//! checks belong to the form layer, not here.

pub mod ip;
pub mod mac;
pub mod port;

pub use ip::{is_valid_address, is_valid_cidr_suffix, is_valid_ipv4, is_valid_ipv6, AddressRules};
pub use mac::{is_valid_mac, normalize_mac};
pub use port::is_valid_port_spec;
