//! # CIDR Blocks
//!
//! Turns `A.B.C.D/P` text into the list of addresses that follow-up probing walks.
//!
//! The base address is used exactly as written: `192.168.1.5/24` yields 256
//! addresses starting at `192.168.1.5`, not at `192.168.1.0`.

use std::net::Ipv4Addr;
use std::str::FromStr;

use tracing::warn;

use crate::error::DiscoveryError;
use crate::network::ip::{self, NetworkAddress};

/// Represents a continuous range of IPv4 addresses, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone + use<> {
        let start: u32 = u32::from(self.start_addr);
        let end: u32 = u32::from(self.end_addr);
        (start..=end).map(Ipv4Addr::from)
    }

    pub fn len(&self) -> u64 {
        let start: u64 = u32::from(self.start_addr).into();
        let end: u64 = u32::from(self.end_addr).into();
        if start > end { 0 } else { end - start + 1 }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A base address plus a prefix length, e.g. `192.168.1.0/24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CidrBlock {
    pub base: NetworkAddress,
    pub prefix: u8,
}

impl CidrBlock {
    pub fn new(base: NetworkAddress, prefix: u8) -> Result<Self, DiscoveryError> {
        if prefix > 32 {
            return Err(DiscoveryError::invalid(format!("prefix {prefix} > 32")));
        }
        Ok(Self { base, prefix })
    }

    pub fn host_bits(&self) -> u32 {
        32 - u32::from(self.prefix)
    }

    /// Number of addresses the block nominally covers, `2^(32 - prefix)`.
    pub fn size(&self) -> u64 {
        1u64 << self.host_bits()
    }

    /// The addresses actually produced, starting at the unmasked base.
    ///
    /// Blocks running past `255.255.255.255` stop there instead of wrapping to `0.0.0.0`.
    pub fn range(&self) -> Ipv4Range {
        let last: u64 = u64::from(self.base) + self.size() - 1;
        let end: u32 = u32::try_from(last).unwrap_or(u32::MAX);
        Ipv4Range::new(Ipv4Addr::from(self.base), Ipv4Addr::from(end))
    }

    /// Lazily yields every address of the block in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone + use<> {
        self.range().iter()
    }
}

impl FromStr for CidrBlock {
    type Err = DiscoveryError;

    /// Parses `A.B.C.D/P` where `P` is a decimal integer in `0..=32`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((ip_str, prefix_str)) = s.split_once('/') else {
            return Err(DiscoveryError::invalid(format!("missing '/' in CIDR '{s}'")));
        };

        let base: NetworkAddress = ip::parse_address(ip_str)?;

        if prefix_str.is_empty() || !prefix_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DiscoveryError::invalid(format!(
                "invalid prefix in CIDR '{s}'"
            )));
        }
        let prefix: u8 = prefix_str
            .parse::<u8>()
            .map_err(|_| DiscoveryError::invalid(format!("prefix out of range in CIDR '{s}'")))?;

        CidrBlock::new(base, prefix)
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", ip::format_address(self.base), self.prefix)
    }
}

/// Expands a CIDR string into every address it covers, as dotted-decimal text.
///
/// Nothing is returned unless the whole input is valid.
pub fn expand(cidr: &str) -> Result<Vec<String>, DiscoveryError> {
    let block: CidrBlock = cidr.parse()?;
    let range: Ipv4Range = block.range();

    if range.len() < block.size() {
        warn!(
            "{block} runs past 255.255.255.255, keeping {} of {} addresses",
            range.len(),
            block.size()
        );
    }

    let mut addrs: Vec<String> = Vec::with_capacity(range.len() as usize);
    addrs.extend(range.iter().map(|addr| ip::format_address(addr.into())));
    Ok(addrs)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
