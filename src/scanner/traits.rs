//! Prober trait abstraction.
//!
//! Defines the interface the scan driver probes through, so the driver can
//! run against a real network stack or a scripted stand-in.

use crate::types::Address;
use async_trait::async_trait;
use std::fmt;

/// Outcome of probing one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    /// A TCP connection was established.
    Available,
    /// The connection attempt failed for any reason.
    Unavailable,
}

impl fmt::Display for Reachability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "AVAILABLE"),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

impl From<bool> for Reachability {
    fn from(reachable: bool) -> Self {
        if reachable {
            Self::Available
        } else {
            Self::Unavailable
        }
    }
}

/// Result of probing a single address/port pair.
///
/// Produced, printed and dropped; results are never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// The address that was probed.
    pub address: Address,
    /// The TCP port that was probed.
    pub port: u16,
    /// Whether the port accepted a connection.
    pub status: Reachability,
    /// Time spent on the connection attempt, in milliseconds.
    pub response_time_ms: Option<u64>,
}

impl ProbeResult {
    /// Create a new probe result.
    pub fn new(address: Address, port: u16, status: Reachability) -> Self {
        Self {
            address,
            port,
            status,
            response_time_ms: None,
        }
    }

    /// Set the response time.
    pub fn with_response_time(mut self, time_ms: u64) -> Self {
        self.response_time_ms = Some(time_ms);
        self
    }

    /// Check if the port was reachable.
    pub fn is_reachable(&self) -> bool {
        self.status == Reachability::Available
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.status, self.address, self.port)
    }
}

/// Trait for connectivity probes.
///
/// A probe never fails: every failure mode collapses into
/// [`Reachability::Unavailable`].
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe a single address/port pair.
    async fn probe(&self, address: &Address, port: u16) -> ProbeResult;
}
