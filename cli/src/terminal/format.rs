use arpscout_common::host::Host;
use colored::*;

use crate::terminal::colors;

const NO_WIDTH: usize = 4;
const MAC_WIDTH: usize = 20;
const IP_WIDTH: usize = 16;

pub fn host_table_header() -> String {
    format!(
        "{:<NO_WIDTH$} {:<MAC_WIDTH$} {:<IP_WIDTH$} {}",
        "No.", "MAC Address", "IP Address", "Vendor"
    )
    .bold()
    .color(colors::PRIMARY)
    .to_string()
}

/// One table row; numbering starts at 1.
pub fn host_to_row(idx: usize, host: &Host) -> String {
    // Pad before coloring, escape codes would count towards the width.
    let no: ColoredString = format!("{:<NO_WIDTH$}", idx + 1).color(colors::ACCENT);
    let mac: ColoredString = format!("{:<MAC_WIDTH$}", host.mac_addr()).color(colors::MAC_ADDR);
    let ip: ColoredString = format!("{:<IP_WIDTH$}", host.ip_addr()).color(colors::IPV4_ADDR);
    let vendor: ColoredString = match &host.vendor {
        Some(vendor) => vendor.color(colors::VENDOR),
        None => host.vendor_or_unknown().color(colors::UNKNOWN),
    };
    format!("{no} {mac} {ip} {vendor}")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
