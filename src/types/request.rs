//! The immutable description of one scan.

use super::Address;
use std::fmt;

/// What to scan: an inclusive address span and a single TCP port.
///
/// Built once from the command line and never modified afterwards. When only
/// one address is given, `start` and `end` are the same address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub start: Address,
    pub end: Address,
    pub port: u16,
}

impl ScanRequest {
    /// Create a request covering `start..=end`.
    pub fn new(start: Address, end: Address, port: u16) -> Self {
        Self { start, end, port }
    }

    /// Create a request for a single address.
    pub fn single(address: Address, port: u16) -> Self {
        Self {
            start: address.clone(),
            end: address,
            port,
        }
    }

    /// Whether the request covers exactly one address.
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for ScanRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}:{}", self.start, self.port)
        } else {
            write!(f, "{}-{}:{}", self.start, self.end, self.port)
        }
    }
}
