//! # arpscout core
//!
//! The parts of `arpscout` that talk to the operating system.
//!
//! * **[`system`]**: Which command dumps the neighbor table on this platform.
//! * **[`neighbor`]**: Running that command and collecting its output.
//! * **[`vendors`]**: Vendor repositories beyond the file-backed OUI table.
//! * **[`discovery`]**: The discovery use case tying those together.

pub mod discovery;
pub mod neighbor;
pub mod system;
pub mod vendors;
