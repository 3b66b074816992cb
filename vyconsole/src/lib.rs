//! Router console configuration normalization, validation, and diffing.
//!
//! This library is the data-shaping core of a browser-based management
//! console for a VyOS-style router/firewall appliance. The backend exposes
//! REST CRUD endpoints per entity type and is the single source of truth;
//! everything here is a pure, stateless computation between its wire JSON
//! and the stable shapes the presentation layer renders.
//!
//! # Architecture
//!
//! ## Validation
//!
//! - [`validate`] — format validators for network primitives: IPv4/IPv6
//!   addresses with optional CIDR suffix, MAC addresses, and
//!   port/port-range expressions. Pure `-> bool` functions, never panic.
//!
//! ## Transformation
//!
//! - [`transform`] — per-entity-type wire↔UI mappers for interfaces,
//!   routes, ARP entries, DNS, firewall rules, NAT rules, log entries,
//!   WireGuard, BGP, IS-IS, and users. Decoding is infallible with
//!   documented defaults; encoding omits empty optional fields so saves
//!   never clear backend values by accident.
//! - [`paginate`] — in-memory collection paging for table views.
//!
//! ## Diff review
//!
//! - [`profile`] — ignore-prefix profiles for muting volatile or
//!   secret-bearing lines when comparing configuration snapshots.
//! - [`report`] — terminal-friendly colored diff output.
//!
//! # Built on line-diff-core
//!
//! Snapshot comparison uses `line-diff-core` for the positional line diff,
//! serialization, and export. All router-specific logic lives in this
//! crate.
//!
//! # Concurrency
//!
//! Every function is referentially transparent given its inputs: no
//! module-level caches, no statics, safe to call concurrently from
//! independent call sites.

pub mod paginate;
pub mod profile;
pub mod report;
pub mod transform;
pub mod validate;
