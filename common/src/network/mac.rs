//! This module is used for **Medium Access Control (MAC)** address handling.
//!
//! Neighbor tables print hardware addresses in several shapes (`0:aa:bb:1:2:3`,
//! `00-AA-BB-01-02-03`, ...). Vendor resolution only needs the
//! **Organizationally unique identifier (OUI)**, the first three octets, so the
//! helpers here reduce any of those shapes to one canonical prefix.

use pnet::util::MacAddr;

use crate::error::DiscoveryError;

fn is_separator(c: char) -> bool {
    c == ':' || c == '-' || c == '.' || c.is_whitespace()
}

fn parse_hex_octet(token: &str) -> Option<u8> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(token, 16).ok()
}

/// Reduces a hardware address to its 6-hex-digit uppercase vendor prefix.
///
/// Any of `:`, `-`, `.` or whitespace separates octets and single digit octets
/// are padded, so `0:AA:bb:11:22:33` and `00-AA-BB-11-22-33` both give `00AABB`.
pub fn normalize_to_prefix(hw_addr: &str) -> Result<String, DiscoveryError> {
    let mut prefix = String::with_capacity(6);
    // Runs of separators collapse, but the address must not start with one.
    let mut tokens = hw_addr.split(is_separator);
    let first: Option<&str> = tokens.next();
    let mut tokens = first.into_iter().chain(tokens.filter(|t| !t.is_empty()));

    for _ in 0..3 {
        let token: &str = tokens.next().ok_or_else(|| {
            DiscoveryError::invalid(format!("'{hw_addr}' has fewer than 3 octets"))
        })?;
        let octet: u8 = parse_hex_octet(token).ok_or_else(|| {
            DiscoveryError::invalid(format!("'{token}' in '{hw_addr}' is not a hex octet"))
        })?;
        prefix.push_str(&format!("{octet:02X}"));
    }

    Ok(prefix)
}

/// Parses a full 6 octet hardware address written with `:` or `-` separators.
pub fn parse_hardware_address(text: &str) -> Result<MacAddr, DiscoveryError> {
    let octets: Vec<u8> = text
        .split([':', '-'])
        .map(|token| match token.len() {
            1 | 2 => parse_hex_octet(token),
            _ => None,
        })
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| DiscoveryError::invalid(format!("'{text}' is not a hardware address")))?;

    match octets[..] {
        [a, b, c, d, e, f] => Ok(MacAddr::new(a, b, c, d, e, f)),
        _ => Err(DiscoveryError::invalid(format!(
            "'{text}' does not have 6 octets"
        ))),
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
