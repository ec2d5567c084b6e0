use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the discovery and expansion pipelines.
///
/// Individual neighbor-table or OUI database lines never produce an error,
/// they are skipped. Only whole inputs, subprocesses and files fail.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Malformed address, CIDR block or hardware address text.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The neighbor-table command could not be started or its output read.
    #[error("Failed to read the neighbor table via '{command}': {source}")]
    Acquisition {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The OUI database could not be opened or read.
    #[error("Failed to read OUI database {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DiscoveryError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }
}
