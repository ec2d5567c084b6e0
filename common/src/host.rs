use crate::neighbor::ArpEntry;

/// Shown in place of a vendor when the OUI is not in the database.
pub const UNKNOWN_VENDOR: &str = "Unknown";

/// A device found in the neighbor table, enriched with its vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub entry: ArpEntry,
    pub vendor: Option<String>,
}

impl From<ArpEntry> for Host {
    fn from(entry: ArpEntry) -> Self {
        Self {
            entry,
            vendor: None,
        }
    }
}

impl Host {
    pub fn ip_addr(&self) -> &str {
        &self.entry.ip_addr
    }

    pub fn mac_addr(&self) -> &str {
        &self.entry.mac_addr
    }

    pub fn vendor_or_unknown(&self) -> &str {
        self.vendor.as_deref().unwrap_or(UNKNOWN_VENDOR)
    }
}
