use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use colored::*;
use tracing::info;

use crate::terminal::{colors, print};
use arpscout_common::config::Config;
use arpscout_common::network::ip;
use arpscout_common::network::range::CidrBlock;

pub fn expand(cidr: &str, cfg: &Config) -> anyhow::Result<()> {
    let block: CidrBlock = cidr
        .parse()
        .with_context(|| format!("cannot expand '{cidr}'"))?;

    let start_time: Instant = Instant::now();
    info!(
        "Expanding {block} into {} addresses, writing to {}",
        block.range().len(),
        cfg.output.display()
    );

    let addrs = block.iter().map(|addr| ip::format_address(addr.into()));
    let written: u64 = write_address_list(&cfg.output, addrs)?;

    let count: ColoredString = written.to_string().bold().green();
    let path: ColoredString = cfg.output.display().to_string().color(colors::ACCENT);
    let total_time: ColoredString = format!("{:.2}s", start_time.elapsed().as_secs_f64())
        .bold()
        .yellow();
    print::print_status(format!("Wrote {count} addresses to {path} in {total_time}"));
    Ok(())
}

/// Writes one address per line, with no header or trailing metadata.
pub fn write_address_list<I, S>(path: &Path, addrs: I) -> anyhow::Result<u64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file: File = File::create(path)
        .with_context(|| format!("failed to open {} for writing", path.display()))?;
    let mut writer: BufWriter<File> = BufWriter::new(file);

    let mut written: u64 = 0;
    for addr in addrs {
        writeln!(writer, "{}", addr.as_ref())
            .with_context(|| format!("failed to write {}", path.display()))?;
        written += 1;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(written)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
