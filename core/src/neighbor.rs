//! # Neighbor Table Acquisition
//!
//! Dumps the operating system's neighbor (ARP) cache through an external command
//! and hands back its standard output line by line.
//!
//! Acquisition blocks until the command exits and is never retried. A command that
//! ran but printed nothing is a valid, empty table.

use std::io;
use std::process::{Command, Output, Stdio};

use arpscout_common::DiscoveryError;
use tracing::{debug, info, warn};

use crate::system::{self, NeighborCommand};

/// Anything able to produce the raw text of a neighbor table.
pub trait NeighborSource {
    fn acquire(&self) -> Result<Vec<String>, DiscoveryError>;
}

/// Reads the neighbor table by running external commands.
pub struct CommandSource {
    candidates: Vec<NeighborCommand>,
}

impl CommandSource {
    pub fn new(candidates: Vec<NeighborCommand>) -> Self {
        Self { candidates }
    }

    /// The commands of the platform this was built for, see [`system::neighbor_commands`].
    pub fn native() -> Self {
        Self::new(system::neighbor_commands())
    }
}

impl NeighborSource for CommandSource {
    fn acquire(&self) -> Result<Vec<String>, DiscoveryError> {
        let mut last_error: Option<DiscoveryError> = None;

        for command in &self.candidates {
            match run(command) {
                Ok(lines) => {
                    info!("Read {} lines from '{command}'", lines.len());
                    return Ok(lines);
                }
                Err(e) => {
                    warn!("{e}");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| DiscoveryError::Acquisition {
            command: String::from("<none>"),
            source: io::Error::new(
                io::ErrorKind::Unsupported,
                "no neighbor table command for this platform",
            ),
        }))
    }
}

/// Runs one command to completion and splits its standard output into lines.
fn run(command: &NeighborCommand) -> Result<Vec<String>, DiscoveryError> {
    let output: Output = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| DiscoveryError::Acquisition {
            command: command.to_string(),
            source,
        })?;

    if !output.status.success() {
        // Keep whatever was printed, a partial table still has usable rows.
        debug!("'{command}' exited with {}", output.status);
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
