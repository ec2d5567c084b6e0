use tracing::error;

use crate::commands::{discover, expand};
use crate::terminal::print;
use arpscout_common::config::Config;

/// Reads the neighbor table, then writes the address list for `cidr`.
pub fn sweep(cidr: &str, cfg: &Config) -> anyhow::Result<()> {
    sweep_with(cidr, cfg, discover::discover)
}

/// A failed table read is reported but does not stop the expansion, and only
/// a failed expansion fails the sweep.
fn sweep_with<D>(cidr: &str, cfg: &Config, discover_step: D) -> anyhow::Result<()>
where
    D: FnOnce(&Config) -> anyhow::Result<()>,
{
    print::header("reading the neighbor table", cfg.quiet);
    if let Err(e) = discover_step(cfg) {
        error!("{e:#}");
    }

    crate::aprint!();
    print::header("expanding cidr block", cfg.quiet);
    expand::expand(cidr, cfg)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
