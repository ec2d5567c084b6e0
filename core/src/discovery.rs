//! # Network Discovery Service
//!
//! Implements the core "read the neighbor table" use case.
//!
//! This service finds the devices the operating system already knows about and
//! aggregates information about them from the vendor repository.

use arpscout_common::DiscoveryError;
use arpscout_common::host::Host;
use arpscout_common::neighbor::{ArpEntry, NeighborFormat};
use arpscout_common::vendors::VendorRepository;
use std::io;

use crate::neighbor::{CommandSource, NeighborSource};

/// Application Service for Network Discovery.
///
/// Orchestrates the discovery process by:
/// 1. delegating the raw table dump to the [`NeighborSource`] trait.
/// 2. parsing it with the [`NeighborFormat`] of the platform.
/// 3. enriching the results with vendor lookups.
pub struct DiscoveryService {
    source: Box<dyn NeighborSource>,
    format: NeighborFormat,
    vendor_repo: Box<dyn VendorRepository>,
}

impl DiscoveryService {
    pub fn new(
        source: Box<dyn NeighborSource>,
        format: NeighborFormat,
        vendor_repo: Box<dyn VendorRepository>,
    ) -> Self {
        Self {
            source,
            format,
            vendor_repo,
        }
    }

    /// A service reading this machine's neighbor table.
    ///
    /// Fails on platforms without a known neighbor table layout.
    pub fn native(vendor_repo: Box<dyn VendorRepository>) -> Result<Self, DiscoveryError> {
        let format: NeighborFormat =
            NeighborFormat::native().ok_or_else(|| DiscoveryError::Acquisition {
                command: String::from("<none>"),
                source: io::Error::new(
                    io::ErrorKind::Unsupported,
                    "neighbor table layout unknown on this platform",
                ),
            })?;

        Ok(Self::new(Box::new(CommandSource::native()), format, vendor_repo))
    }

    /// Reads the neighbor table once and resolves a vendor for every entry.
    ///
    /// An empty table gives `Ok` with no hosts. Entries keep table order.
    pub fn perform_discovery(&self) -> Result<Vec<Host>, DiscoveryError> {
        // 1. Delegate "How to read the table" to the source
        let lines: Vec<String> = self.source.acquire()?;

        // 2. Keep only the lines that are entries
        let entries: Vec<ArpEntry> = self.format.parse_table(&lines);

        // 3. Enrich with Vendor Data
        Ok(self.enrich_vendors(entries))
    }

    fn enrich_vendors(&self, entries: Vec<ArpEntry>) -> Vec<Host> {
        entries
            .into_iter()
            .map(|entry| {
                let vendor: Option<String> = self.vendor_repo.get_vendor(&entry.mac_addr);
                Host { entry, vendor }
            })
            .collect()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
