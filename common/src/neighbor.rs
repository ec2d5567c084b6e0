//! # Neighbor Table Model
//!
//! Defines [`ArpEntry`], one row of the operating system's neighbor (ARP) cache, and
//! [`NeighborFormat`], the closed set of text layouts that cache is dumped in.
//!
//! Parsing is best effort: headers, banners and unresolved entries are expected in
//! the raw output and are silently skipped, never reported as errors.

mod parsers;

use tracing::debug;

/// An (address, hardware address) pair read from the neighbor table.
///
/// Both sides are kept as the text the operating system printed. Entries are not
/// deduplicated, duplicates in the table show up here in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArpEntry {
    pub ip_addr: String,
    pub mac_addr: String,
}

impl ArpEntry {
    pub fn new(ip_addr: impl Into<String>, mac_addr: impl Into<String>) -> Self {
        Self {
            ip_addr: ip_addr.into(),
            mac_addr: mac_addr.into(),
        }
    }
}

/// Text layout of a neighbor table dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborFormat {
    /// `ip neigh show` and net-tools `arp -n`:
    /// `192.168.1.10 dev wlan0 lladdr 00:11:22:33:44:55 REACHABLE`
    Iproute,
    /// BSD style `arp -a` (macOS, FreeBSD, ...):
    /// `? (192.168.1.10) at 0:11:22:33:44:55 on en0 ifscope [ethernet]`
    Bsd,
    /// Windows `arp -a`, a column table preceded by an `Interface:` banner:
    /// `  192.168.1.1           00-11-22-33-44-55     dynamic`
    Windows,
}

impl NeighborFormat {
    /// The layout printed by the neighbor table command of the platform this was built for.
    pub fn native() -> Option<Self> {
        if cfg!(any(target_os = "linux", target_os = "android")) {
            Some(Self::Iproute)
        } else if cfg!(any(
            target_os = "macos",
            target_os = "ios",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd",
            target_os = "dragonfly"
        )) {
            Some(Self::Bsd)
        } else if cfg!(target_os = "windows") {
            Some(Self::Windows)
        } else {
            None
        }
    }

    /// Extracts an entry from one raw line, or `None` when the line holds no entry.
    pub fn parse_line(&self, line: &str) -> Option<ArpEntry> {
        match self {
            Self::Iproute => parsers::parse_iproute_line(line),
            Self::Bsd => parsers::parse_bsd_line(line),
            Self::Windows => parsers::parse_windows_line(line),
        }
    }

    /// Runs [`Self::parse_line`] over a whole dump, keeping entries in table order.
    pub fn parse_table<I, S>(&self, lines: I) -> Vec<ArpEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped: usize = 0;
        let entries: Vec<ArpEntry> = lines
            .into_iter()
            .filter_map(|line| {
                let entry = self.parse_line(line.as_ref());
                if entry.is_none() {
                    skipped += 1;
                }
                entry
            })
            .collect();

        debug!(
            "Parsed {} neighbor entries ({} lines skipped) as {:?}",
            entries.len(),
            skipped,
            self
        );
        entries
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
