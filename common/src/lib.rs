//! # arpscout common
//!
//! Shared models and the pure parsing logic of `arpscout`.
//!
//! * **[`network`]**: IPv4 codec, CIDR expansion and hardware address helpers.
//! * **[`neighbor`]**: Neighbor (ARP) table entries and the per-platform line parsers.
//! * **[`host`]**: A discovered device and its resolved vendor.
//! * **[`oui`]**: Loading and querying the vendor prefix table.
//! * **[`vendors`]**: The contract used to resolve a vendor from a hardware address.
//!
//! Nothing in this crate touches a subprocess or the terminal.

pub mod config;
pub mod error;
pub mod host;
pub mod neighbor;
pub mod network;
pub mod oui;
pub mod vendors;

pub use error::DiscoveryError;
