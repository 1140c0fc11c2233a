//! Error types for psc.
//!
//! Uses `thiserror` for ergonomic error definitions. Each layer gets its own
//! enum; the binary collapses them with `anyhow` at the top level.

use thiserror::Error;

/// Why a dotted-decimal string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressViolation {
    #[error("expected 4 octets, found {0}")]
    OctetCount(usize),

    #[error("octet '{0}' is not a number")]
    NonNumeric(String),

    #[error("octet {0} is outside 0-255")]
    OutOfRange(i64),
}

/// Errors produced while parsing or stepping through IPv4 addresses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid address '{input}': {violation}")]
    InvalidAddress {
        input: String,
        violation: AddressViolation,
    },

    #[error("IPv4 address space exhausted")]
    AddressSpaceExhausted,
}

/// Errors produced while resolving command-line arguments.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("expected 2 or 3 arguments, got {0}")]
    InvalidArgumentCount(usize),

    #[error("invalid ip-from value: {0}")]
    InvalidStartAddress(#[source] AddressError),

    #[error("invalid ip-to value: {0}")]
    InvalidEndAddress(#[source] AddressError),

    #[error("invalid port value: '{0}'")]
    InvalidPort(String),

    #[error(transparent)]
    Syntax(#[from] clap::Error),
}

impl CliError {
    /// Whether clap wants to show help or version text instead of an error.
    pub fn is_informational(&self) -> bool {
        match self {
            Self::Syntax(e) => is_help_or_version(e),
            _ => false,
        }
    }
}

/// Whether a clap error is really a request for help or version text.
pub fn is_help_or_version(e: &clap::Error) -> bool {
    matches!(
        e.kind(),
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
    )
}

/// Errors that abort a running scan.
///
/// Probe failures are results, not errors; only the output sink can fail.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for address operations.
pub type AddressResult<T> = Result<T, AddressError>;

/// Result type alias for argument resolution.
pub type CliResult<T> = Result<T, CliError>;

/// Result type alias for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;
