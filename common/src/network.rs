//! # Network Models
//!
//! Text codecs for the two address families `arpscout` deals with:
//!
//! * **[`ip`]**: dotted-decimal IPv4 addresses <-> `u32`.
//! * **[`range`]**: CIDR blocks and their expansion into address lists.
//! * **[`mac`]**: hardware (MAC) addresses and their vendor prefix.

pub mod ip;
pub mod mac;
pub mod range;
