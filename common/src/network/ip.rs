//! Strict conversion between dotted-decimal text and the numeric form of an IPv4 address.
//!
//! `std::net::Ipv4Addr` refuses octets written with leading zeros (`192.168.001.010`),
//! which real ARP tables and hand-written target lists do contain, so parsing is done
//! here by hand. Formatting goes through `Ipv4Addr`, whose output is already canonical.

use std::net::Ipv4Addr;

use crate::error::DiscoveryError;

/// An IPv4 address in host byte order.
pub type NetworkAddress = u32;

/// Parses `A.B.C.D` into its numeric form.
///
/// Every octet is the longest run of decimal digits at that position and must be
/// at most 255. The first three runs must be followed by a `.`, the last by the end
/// of the input. Signs, whitespace and anything else are rejected.
pub fn parse_address(text: &str) -> Result<NetworkAddress, DiscoveryError> {
    let bytes = text.as_bytes();
    let mut pos: usize = 0;
    let mut addr: NetworkAddress = 0;

    for idx in 0..4 {
        let (octet, len) = parse_octet(&text[pos..])
            .ok_or_else(|| DiscoveryError::invalid(format!("bad octet in address '{text}'")))?;
        addr = (addr << 8) | NetworkAddress::from(octet);
        pos += len;

        if idx < 3 {
            if bytes.get(pos) != Some(&b'.') {
                return Err(DiscoveryError::invalid(format!(
                    "expected 4 dot-separated octets in '{text}'"
                )));
            }
            pos += 1;
        }
    }

    if pos != text.len() {
        return Err(DiscoveryError::invalid(format!(
            "trailing characters after address '{text}'"
        )));
    }

    Ok(addr)
}

/// Formats an address as four decimal octets without leading zeros.
pub fn format_address(addr: NetworkAddress) -> String {
    Ipv4Addr::from(addr).to_string()
}

/// Reads the leading digit run of `s`, returning the octet and how many bytes it used.
fn parse_octet(s: &str) -> Option<(u8, usize)> {
    let len: usize = s.bytes().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }
    // Runs too long for a u32 are out of range anyway.
    let value: u32 = s[..len].parse().ok()?;
    u8::try_from(value).ok().map(|octet| (octet, len))
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

    #[test]
    fn parse_address_basic() {
        assert_eq!(parse_address("192.168.1.10").unwrap(), 0xC0A8_010A);
        assert_eq!(parse_address("0.0.0.0").unwrap(), 0);
        assert_eq!(parse_address("255.255.255.255").unwrap(), u32::MAX);
    }

    #[test]
    fn parse_address_accepts_leading_zeros() {
        assert_eq!(
            parse_address("192.168.001.010").unwrap(),
            parse_address("192.168.1.10").unwrap()
        );
    }

    #[test]
    fn parse_address_rejects_out_of_range() {
        assert!(parse_address("256.0.0.1").is_err());
        assert!(parse_address("1.2.3.999").is_err());
        assert!(parse_address("1.2.3.99999999999").is_err());
    }

    #[test]
    fn parse_address_rejects_wrong_octet_count() {
        assert!(parse_address("10.0.0").is_err());
        assert!(parse_address("10.0.0.1.5").is_err());
        assert!(parse_address("").is_err());
    }

    #[test]
    fn parse_address_rejects_garbage() {
        for text in ["a.b.c.d", "10.0.0.1 ", " 10.0.0.1", "10.0.0.1x", "10..0.1", "+1.2.3.4", "1.2.3.-4"] {
            let err = parse_address(text).unwrap_err();
            assert!(err.is_invalid_format(), "{text} gave {err}");
        }
    }

    #[test]
    fn format_address_emits_canonical_text() {
        assert_eq!(format_address(0xC0A8_010A), "192.168.1.10");
        assert_eq!(format_address(0), "0.0.0.0");
        assert_eq!(format_address(u32::MAX), "255.255.255.255");
    }

    #[test]
    fn address_text_round_trips() {
        for text in ["10.0.0.1", "172.16.254.3", "8.8.8.8", "192.168.100.200"] {
            assert_eq!(format_address(parse_address(text).unwrap()), text);
        }
    }
}
