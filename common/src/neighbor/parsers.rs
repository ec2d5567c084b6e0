//! One line parser per [`NeighborFormat`](super::NeighborFormat) layout.

use super::ArpEntry;
use crate::network::ip;

/// `ip neigh show` / `arp -n` rows.
///
/// The address is the first token. The hardware address follows `lladdr`, or
/// `ether` when there is no `lladdr`. Rows with neither marker (`FAILED`,
/// `INCOMPLETE`, the `arp -n` header) are not entries, and neither are IPv6
/// neighbors, which `ip neigh show` lists alongside the IPv4 ones.
pub(super) fn parse_iproute_line(line: &str) -> Option<ArpEntry> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let ip_addr: &str = tokens.first()?;
    ip::parse_address(ip_addr).ok()?;

    let marker: usize = ["lladdr", "ether"]
        .iter()
        .find_map(|marker| tokens.iter().position(|token| token == marker))?;
    let mac_addr: &str = tokens.get(marker + 1)?;

    Some(ArpEntry::new(ip_addr, mac_addr))
}

/// BSD `arp -a` rows.
///
/// The address sits in the first parenthesis pair, the hardware address is the
/// token after ` at `. Unresolved rows print `(incomplete)` there and are skipped.
pub(super) fn parse_bsd_line(line: &str) -> Option<ArpEntry> {
    let open: usize = line.find('(')?;
    let inner: &str = &line[open + 1..];
    let ip_addr: &str = &inner[..inner.find(')')?];
    if ip_addr.is_empty() {
        return None;
    }

    let at: usize = line.find(" at ")?;
    let mac_addr: &str = line[at + 4..].split_whitespace().next()?;
    if mac_addr.contains("incomplete") {
        return None;
    }

    Some(ArpEntry::new(ip_addr, mac_addr))
}

/// Windows `arp -a` rows.
///
/// Only rows starting with a digit carry entries, which drops the `Interface:`
/// banner and the column header. Hyphens in the hardware address become colons.
pub(super) fn parse_windows_line(line: &str) -> Option<ArpEntry> {
    let row: &str = line.trim_start();
    if !row.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let mut tokens = row.split_whitespace();
    let ip_addr: &str = tokens.next()?;
    let mac_addr: &str = tokens.next()?;

    Some(ArpEntry::new(ip_addr, mac_addr.replace('-', ":")))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    /*************************************************************
                       ip neigh / arp -n
    **************************************************************/

    #[test]
    fn iproute_reads_lladdr() {
        let line = "192.168.1.10 dev wlan0 lladdr 00:11:22:33:44:55 REACHABLE";
        assert_eq!(
            parse_iproute_line(line),
            Some(ArpEntry::new("192.168.1.10", "00:11:22:33:44:55"))
        );
    }

    #[test]
    fn iproute_reads_net_tools_ether_column() {
        let line = "192.168.1.1              ether   c8:3a:35:0a:0b:0c   C                     eth0";
        assert_eq!(
            parse_iproute_line(line),
            Some(ArpEntry::new("192.168.1.1", "c8:3a:35:0a:0b:0c"))
        );
    }

    #[test]
    fn iproute_prefers_lladdr_over_ether() {
        let line = "10.0.0.2 ether aa:aa:aa:aa:aa:aa lladdr 00:11:22:33:44:55";
        assert_eq!(parse_iproute_line(line).unwrap().mac_addr, "00:11:22:33:44:55");
    }

    #[test]
    fn iproute_rejects_rows_without_hardware_address() {
        assert_eq!(parse_iproute_line("192.168.1.7 dev eth0  FAILED"), None);
        assert_eq!(parse_iproute_line("192.168.1.8 dev eth0  INCOMPLETE"), None);
        assert_eq!(parse_iproute_line("192.168.1.9 dev eth0 lladdr"), None);
        assert_eq!(parse_iproute_line("   "), None);
    }

    #[test]
    fn iproute_skips_ipv6_neighbors() {
        let line = "fe80::1 dev eth0 lladdr de:ad:be:ef:00:01 router STALE";
        assert_eq!(parse_iproute_line(line), None);
        assert_eq!(
            parse_iproute_line("2001:db8::7 dev eth0 lladdr 00:11:22:33:44:55 REACHABLE"),
            None
        );
    }

    /*************************************************************
                            BSD arp -a
    **************************************************************/

    #[test]
    fn bsd_reads_parenthesized_address() {
        let line = "? (192.168.1.10) at 0:11:22:33:44:55 on en0 ifscope [ethernet]";
        assert_eq!(
            parse_bsd_line(line),
            Some(ArpEntry::new("192.168.1.10", "0:11:22:33:44:55"))
        );
    }

    #[test]
    fn bsd_reads_named_hosts() {
        let line = "router.lan (192.168.1.1) at a4:5e:60:e1:2:3 on en0 ifscope [ethernet]";
        assert_eq!(
            parse_bsd_line(line),
            Some(ArpEntry::new("192.168.1.1", "a4:5e:60:e1:2:3"))
        );
    }

    #[test]
    fn bsd_rejects_incomplete_entries() {
        let line = "? (192.168.1.44) at (incomplete) on en0 ifscope [ethernet]";
        assert_eq!(parse_bsd_line(line), None);
    }

    #[test]
    fn bsd_rejects_lines_missing_parts() {
        assert_eq!(parse_bsd_line("? 192.168.1.10 at 0:11:22:33:44:55"), None);
        assert_eq!(parse_bsd_line("? (192.168.1.10) on en0"), None);
        assert_eq!(parse_bsd_line("? () at 0:11:22:33:44:55"), None);
        assert_eq!(parse_bsd_line("? (192.168.1.10 at 0:11:22:33:44:55"), None);
    }

    /*************************************************************
                           Windows arp -a
    **************************************************************/

    #[test]
    fn windows_reads_columns_and_normalizes_hyphens() {
        let line = "  192.168.1.1           00-11-22-33-44-55     dynamic";
        assert_eq!(
            parse_windows_line(line),
            Some(ArpEntry::new("192.168.1.1", "00:11:22:33:44:55"))
        );
    }

    #[test]
    fn windows_rejects_banner_and_header() {
        assert_eq!(parse_windows_line("Interface: 192.168.1.5 --- 0x3"), None);
        assert_eq!(parse_windows_line("  Internet Address      Physical Address      Type"), None);
        assert_eq!(parse_windows_line("  192.168.1.1"), None);
    }
}
