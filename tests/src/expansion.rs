use arpscout_common::network::ip;
use arpscout_common::network::range::{self, CidrBlock};

#[test]
fn expansion_of_a_slash_24_is_contiguous() {
    let addrs: Vec<String> = range::expand("192.168.1.0/24").unwrap();

    assert_eq!(addrs.len(), 256);
    assert_eq!(addrs.first().map(String::as_str), Some("192.168.1.0"));
    assert_eq!(addrs.last().map(String::as_str), Some("192.168.1.255"));

    let codes: Vec<u32> = addrs.iter().map(|a| ip::parse_address(a).unwrap()).collect();
    assert!(codes.windows(2).all(|w| w[1] == w[0] + 1));
}

#[test]
fn unaligned_base_is_expanded_from_the_base_itself() {
    assert_eq!(
        range::expand("10.0.0.5/31").unwrap(),
        vec!["10.0.0.5".to_string(), "10.0.0.6".to_string()]
    );
}

#[test]
fn single_host_and_whole_space_blocks() {
    assert_eq!(range::expand("8.8.8.8/32").unwrap(), vec!["8.8.8.8".to_string()]);

    let all: CidrBlock = "0.0.0.0/0".parse().unwrap();
    assert_eq!(all.size(), 1u64 << 32);
    assert_eq!(all.iter().next_back().map(u32::from), Some(u32::MAX));
}

#[test]
fn block_running_past_the_last_address_is_truncated() {
    let addrs: Vec<String> = range::expand("255.255.255.254/30").unwrap();
    assert_eq!(addrs, vec!["255.255.255.254".to_string(), "255.255.255.255".to_string()]);
}

#[test]
fn malformed_blocks_are_rejected() {
    for input in [
        "192.168.1.0",
        "192.168.1.0/33",
        "192.168.1.0/",
        "192.168.1.0/x",
        "300.1.1.1/24",
        "1.2.3/24",
        "",
    ] {
        let err = range::expand(input).unwrap_err();
        assert!(err.is_invalid_format(), "{input:?} gave {err}");
    }
}

#[test]
fn codec_round_trips_through_text() {
    for text in ["0.0.0.0", "10.0.0.1", "172.16.254.3", "255.255.255.255"] {
        let code: u32 = ip::parse_address(text).unwrap();
        assert_eq!(ip::format_address(code), text);
    }
    assert_eq!(ip::parse_address("010.001.000.001").unwrap(), 0x0A01_0001);
}
