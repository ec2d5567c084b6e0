use std::sync::OnceLock;

use arpscout_common::network::mac;
use arpscout_common::vendors::VendorRepository;
use mac_oui::Oui;
use tracing::warn;

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

/// Retrieves or initializes the **Organizationally unique identifier** database
/// compiled into the binary.
fn get_oui_db() -> Option<&'static Oui> {
    OUI_DB
        .get_or_init(|| match Oui::default() {
            Ok(db) => Some(db),
            Err(e) => {
                warn!("Failed to load the bundled OUI database: {e:?}");
                None
            }
        })
        .as_ref()
}

/// Vendor lookups against the database bundled by the `mac_oui` crate.
///
/// Used when no `oui.txt` is at hand.
pub struct BundledOuiRepo;

impl VendorRepository for BundledOuiRepo {
    fn get_vendor(&self, mac_addr: &str) -> Option<String> {
        let oui_db: &Oui = get_oui_db()?;
        // mac_oui wants the canonical colon form.
        let canonical: String = mac::parse_hardware_address(mac_addr).ok()?.to_string();
        match oui_db.lookup_by_mac(&canonical) {
            Ok(Some(entry)) => Some(entry.company_name.clone()),
            Ok(None) => None,
            Err(_) => None,
        }
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
