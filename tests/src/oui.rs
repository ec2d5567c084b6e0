use std::io::Write;

use arpscout_common::oui::OuiTable;
use arpscout_common::vendors::VendorRepository;

const IEEE_SAMPLE: &str = "\
OUI/MA-L                                                    Organization
company_id                                                  Organization
                                                            Address

28-6F-B9   (hex)\t\tNokia Shanghai Bell Co., Ltd.
286FB9     (base 16)\t\tNokia Shanghai Bell Co., Ltd.
\t\t\t\tNo.388 Ning Qiao Road,Jin Qiao Pudong Shanghai
\t\t\t\tShanghai   201206
\t\t\t\tCN

08-EA-44   (hex)\t\tExtreme Networks Headquarters
08EA44     (base 16)\t\tExtreme Networks Headquarters
";

fn write_oui_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn ieee_file_resolves_vendors() {
    let file = write_oui_file(IEEE_SAMPLE);
    let table = OuiTable::load(file.path()).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(
        table.lookup_vendor("28:6f:b9:12:34:56"),
        Some("Nokia Shanghai Bell Co., Ltd.")
    );
    assert_eq!(
        table.get_vendor("08-EA-44-00-00-01").as_deref(),
        Some("Extreme Networks Headquarters")
    );
    assert_eq!(table.lookup_vendor("FF:FF:FF:00:00:00"), None);
    assert_eq!(table.lookup_vendor("not a mac"), None);
}

#[test]
fn empty_file_is_an_empty_table() {
    let file = write_oui_file("");
    let table = OuiTable::load(file.path()).unwrap();

    assert!(table.is_empty());
    assert_eq!(table.lookup_vendor("28:6F:B9:00:00:00"), None);
}

#[test]
fn crlf_file_loads_like_lf() {
    let file = write_oui_file(&IEEE_SAMPLE.replace('\n', "\r\n"));
    let table = OuiTable::load(file.path()).unwrap();

    assert_eq!(
        table.lookup_vendor("28:6F:B9:00:00:00"),
        Some("Nokia Shanghai Bell Co., Ltd.")
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = OuiTable::load(dir.path().join("oui.txt")).unwrap_err();
    assert!(!err.is_invalid_format());
}
