pub mod discover;
pub mod expand;
pub mod sweep;

use std::path::PathBuf;

use arpscout_common::config::Config;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "arpscout")]
#[command(about = "Lists the devices in the local neighbor table and expands CIDR blocks.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Path of the IEEE OUI database used to resolve vendors
    #[arg(long, global = true, default_value = "oui.txt")]
    pub oui: PathBuf,

    /// Resolve vendors with the database compiled into arpscout instead of --oui
    #[arg(long, global = true)]
    pub bundled_oui: bool,

    /// File the expanded address list is written to
    #[arg(short, long, global = true, default_value = "all_ips.txt")]
    pub output: PathBuf,

    /// Print less (-q drops headers, -qq only prints results)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the devices in this machine's neighbor (ARP) table
    #[command(alias = "d")]
    Discover,
    /// Write every address of a CIDR block to the output file
    #[command(alias = "e")]
    Expand { cidr: String },
    /// Discover, then expand a CIDR block
    #[command(alias = "s")]
    Sweep { cidr: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            oui_path: self.oui.clone(),
            bundled_oui: self.bundled_oui,
            output: self.output.clone(),
            quiet: self.quiet,
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
