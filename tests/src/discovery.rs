use arpscout_common::DiscoveryError;
use arpscout_common::host::{Host, UNKNOWN_VENDOR};
use arpscout_common::neighbor::NeighborFormat;
use arpscout_common::oui::{OuiRecord, OuiTable};
use arpscout_core::discovery::DiscoveryService;
use arpscout_core::neighbor::NeighborSource;

const OUI_TXT: &str = "\
28-6F-B9   (hex)\t\tNokia Shanghai Bell Co., Ltd.
00-11-22   (hex)\t\tCIMSYS Inc
";

struct CannedTable(&'static str);

impl NeighborSource for CannedTable {
    fn acquire(&self) -> Result<Vec<String>, DiscoveryError> {
        Ok(self.0.lines().map(String::from).collect())
    }
}

fn service(table: &'static str, format: NeighborFormat) -> DiscoveryService {
    let repo: OuiTable = OUI_TXT.parse().unwrap();
    DiscoveryService::new(Box::new(CannedTable(table)), format, Box::new(repo))
}

fn pairs(hosts: &[Host]) -> Vec<(&str, &str, &str)> {
    hosts
        .iter()
        .map(|h| (h.ip_addr(), h.mac_addr(), h.vendor_or_unknown()))
        .collect()
}

#[test]
fn iproute_table_end_to_end() {
    let table = "\
192.168.1.1 dev eth0 lladdr 28:6f:b9:aa:bb:cc REACHABLE
192.168.1.7 dev eth0  FAILED
192.168.1.9 dev eth0 lladdr 00:11:22:33:44:55 STALE
fe80::1 dev eth0 lladdr de:ad:be:ef:00:01 router STALE
";
    let hosts = service(table, NeighborFormat::Iproute).perform_discovery().unwrap();

    assert_eq!(
        pairs(&hosts),
        vec![
            ("192.168.1.1", "28:6f:b9:aa:bb:cc", "Nokia Shanghai Bell Co., Ltd."),
            ("192.168.1.9", "00:11:22:33:44:55", "CIMSYS Inc"),
        ]
    );
}

#[test]
fn bsd_table_end_to_end() {
    let table = "\
? (192.168.1.1) at 28:6f:b9:aa:bb:cc on en0 ifscope [ethernet]
? (192.168.1.5) at (incomplete) on en0 ifscope [ethernet]
router.lan (10.0.0.1) at 0:11:22:3:4:5 on en0 ifscope [ethernet]
";
    let hosts = service(table, NeighborFormat::Bsd).perform_discovery().unwrap();

    assert_eq!(
        pairs(&hosts),
        vec![
            ("192.168.1.1", "28:6f:b9:aa:bb:cc", "Nokia Shanghai Bell Co., Ltd."),
            ("10.0.0.1", "0:11:22:3:4:5", "CIMSYS Inc"),
        ]
    );
}

#[test]
fn windows_table_end_to_end() {
    let table = "\

Interface: 192.168.1.100 --- 0x4
  Internet Address      Physical Address      Type
  192.168.1.1           28-6f-b9-aa-bb-cc     dynamic
  192.168.1.255         ff-ff-ff-ff-ff-ff     static
";
    let hosts = service(table, NeighborFormat::Windows).perform_discovery().unwrap();

    assert_eq!(
        pairs(&hosts),
        vec![
            ("192.168.1.1", "28:6f:b9:aa:bb:cc", "Nokia Shanghai Bell Co., Ltd."),
            ("192.168.1.255", "ff:ff:ff:ff:ff:ff", UNKNOWN_VENDOR),
        ]
    );
}

#[test]
fn empty_table_is_not_an_error() {
    let hosts = service("", NeighborFormat::Iproute).perform_discovery().unwrap();
    assert!(hosts.is_empty());
}

#[cfg(unix)]
#[test]
fn command_source_feeds_the_service() {
    use arpscout_core::neighbor::CommandSource;
    use arpscout_core::system::NeighborCommand;

    let source = CommandSource::new(vec![
        NeighborCommand::new("arpscout-no-such-program", Vec::<String>::new()),
        NeighborCommand::new(
            "sh",
            ["-c", "echo '10.1.1.1 dev eth0 lladdr 28:6f:b9:00:00:01 REACHABLE'"],
        ),
    ]);
    let repo = OuiTable::from_records(vec![OuiRecord {
        prefix: "286FB9".into(),
        vendor: "Nokia Shanghai Bell Co., Ltd.".into(),
    }]);
    let service = DiscoveryService::new(Box::new(source), NeighborFormat::Iproute, Box::new(repo));

    let hosts = service.perform_discovery().unwrap();
    assert_eq!(
        pairs(&hosts),
        vec![("10.1.1.1", "28:6f:b9:00:00:01", "Nokia Shanghai Bell Co., Ltd.")]
    );
}
