//! # OUI Database
//!
//! Loads the IEEE vendor database (`oui.txt`) into an in-memory [`OuiTable`].
//!
//! Only two kinds of line matter in that file:
//!
//! ```text
//! 28-6F-B9   (hex)        Nokia Shanghai Bell Co., Ltd.
//! 286FB9     (base 16)    Nokia Shanghai Bell Co., Ltd.
//! ```
//!
//! A record is taken from lines starting with the hyphenated prefix; every other
//! line (address blocks, headers, the `(base 16)` duplicate) is ignored.

use std::convert::Infallible;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::DiscoveryError;
use crate::network::mac;
use crate::vendors::VendorRepository;

const VENDOR_MARKERS: [&str; 2] = ["(hex)", "(base 16)"];

/// One vendor prefix, e.g. `286FB9` -> `Nokia Shanghai Bell Co., Ltd.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OuiRecord {
    pub prefix: String,
    pub vendor: String,
}

/// Vendor prefixes in the order they were loaded.
///
/// Lookups scan linearly and the first record with a matching prefix wins, so
/// load order decides between duplicate prefixes.
#[derive(Debug, Clone, Default)]
pub struct OuiTable {
    records: Vec<OuiRecord>,
}

impl OuiTable {
    /// Loads the database at `path`.
    ///
    /// A file without a single usable record gives an empty table, not an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DiscoveryError> {
        let path: &Path = path.as_ref();
        let io_err = |source: io::Error| DiscoveryError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file: File = File::open(path).map_err(io_err)?;
        let table: OuiTable = Self::parse(BufReader::new(file)).map_err(io_err)?;

        info!("Loaded {} OUI records from {}", table.len(), path.display());
        Ok(table)
    }

    /// Reads records from any buffered source. Invalid UTF-8 is replaced, not rejected.
    pub fn parse<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut records: Vec<OuiRecord> = Vec::new();
        let mut skipped: usize = 0;

        for raw in reader.split(b'\n') {
            let raw: Vec<u8> = raw?;
            let line = String::from_utf8_lossy(&raw);
            match parse_record(line.trim_end_matches(['\r', '\n'])) {
                Some(record) => records.push(record),
                None => skipped += 1,
            }
        }

        debug!("{} OUI records kept, {skipped} lines ignored", records.len());
        Ok(Self::from_records(records))
    }

    /// Wraps records that are already in lookup order.
    pub fn from_records(records: Vec<OuiRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[OuiRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Vendor registered for an already normalized 6-hex-digit prefix.
    pub fn lookup_prefix(&self, prefix: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|record| record.prefix == prefix)
            .map(|record| record.vendor.as_str())
    }

    /// Vendor of a hardware address in any separator style.
    ///
    /// Addresses that cannot be reduced to a prefix resolve to `None`, like unknown ones.
    pub fn lookup_vendor(&self, hw_addr: &str) -> Option<&str> {
        let prefix: String = mac::normalize_to_prefix(hw_addr).ok()?;
        self.lookup_prefix(&prefix)
    }
}

impl FromStr for OuiTable {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_records(
            s.lines().filter_map(parse_record).collect(),
        ))
    }
}

impl VendorRepository for OuiTable {
    fn get_vendor(&self, mac_addr: &str) -> Option<String> {
        self.lookup_vendor(mac_addr).map(str::to_owned)
    }
}

/// Parses one database line into a record, `None` for anything that is not one.
pub fn parse_record(line: &str) -> Option<OuiRecord> {
    let prefix: String = hyphenated_prefix(line.trim_start())?;

    // A marker with nothing after it does not fall back to the positional vendor.
    let vendor: &str = match marker_vendor(line) {
        Some(vendor) => vendor,
        None => positional_vendor(line)?,
    };
    let vendor: &str = vendor.trim();
    if vendor.is_empty() {
        return None;
    }

    Some(OuiRecord {
        prefix,
        vendor: vendor.to_string(),
    })
}

/// Reads a leading `HH-HH-HH` token into an uppercase `HHHHHH` prefix.
fn hyphenated_prefix(s: &str) -> Option<String> {
    let b: &[u8] = s.as_bytes();
    if b.len() < 8 || b[2] != b'-' || b[5] != b'-' {
        return None;
    }

    let mut prefix = String::with_capacity(6);
    for &c in [b[0], b[1], b[3], b[4], b[6], b[7]].iter() {
        if !c.is_ascii_hexdigit() {
            return None;
        }
        prefix.push(char::from(c.to_ascii_uppercase()));
    }
    Some(prefix)
}

/// Text after the first `(hex)` marker, or after `(base 16)` when there is no `(hex)`.
fn marker_vendor(line: &str) -> Option<&str> {
    VENDOR_MARKERS
        .iter()
        .find_map(|marker| line.find(marker).map(|idx| &line[idx + marker.len()..]))
}

/// Text following the third whitespace delimited token.
fn positional_vendor(line: &str) -> Option<&str> {
    let mut rest: &str = line.trim_start();
    for _ in 0..3 {
        let end: usize = rest.find(char::is_whitespace)?;
        rest = rest[end..].trim_start();
    }
    Some(rest)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
