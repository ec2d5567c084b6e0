use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use tracing::warn;

use crate::terminal::{colors, format, print, spinner};
use arpscout_common::config::Config;
use arpscout_common::host::Host;
use arpscout_common::oui::OuiTable;
use arpscout_common::vendors::VendorRepository;
use arpscout_core::discovery::DiscoveryService;
use arpscout_core::vendors::BundledOuiRepo;

pub fn discover(cfg: &Config) -> anyhow::Result<()> {
    let vendor_repo: Box<dyn VendorRepository> = vendor_repository(cfg);
    let service: DiscoveryService = DiscoveryService::native(vendor_repo)?;
    run(&service, cfg)
}

/// Reads the table through `service` and prints what was found.
pub fn run(service: &DiscoveryService, cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();
    let hosts: Vec<Host> = spinner::while_running("Reading the neighbor table...", || {
        service.perform_discovery()
    })
    .context("failed to read the neighbor table")?;

    discovery_ends(&hosts, start_time.elapsed(), cfg);
    Ok(())
}

/// Picks where vendors come from.
fn vendor_repository(cfg: &Config) -> Box<dyn VendorRepository> {
    if cfg.bundled_oui {
        return Box::new(BundledOuiRepo);
    }
    Box::new(load_oui_table(&cfg.oui_path))
}

/// A missing or unreadable database is not fatal, every host is then listed
/// with an unknown vendor.
fn load_oui_table(path: &Path) -> OuiTable {
    match OuiTable::load(path) {
        Ok(table) => {
            if table.is_empty() {
                warn!("{} holds no OUI records", path.display());
            }
            table
        }
        Err(e) => {
            warn!("{e}, vendors will show as Unknown (try --bundled-oui)");
            OuiTable::default()
        }
    }
}

fn discovery_ends(hosts: &[Host], total_time: Duration, cfg: &Config) {
    if hosts.is_empty() {
        print::header("zero entries found", cfg.quiet);
        print::no_results(cfg.quiet);
        return;
    }

    print::header("neighbor table", cfg.quiet);
    print_hosts(hosts);
    print_summary(hosts, total_time, cfg);
}

fn print_hosts(hosts: &[Host]) {
    print::print(&format::host_table_header());
    for (idx, host) in hosts.iter().enumerate() {
        print::print(&format::host_to_row(idx, host));
    }
}

fn print_summary(hosts: &[Host], total_time: Duration, cfg: &Config) {
    let resolved: usize = hosts.iter().filter(|host| host.vendor.is_some()).count();
    let entries: ColoredString = format!("{} entries", hosts.len()).bold().green();
    let vendors: ColoredString = format!("{resolved} vendors").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("Discovery Complete: {entries} and {vendors} in {total_time}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            crate::aprint!();
            print::print_status(&output);
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
