//! TCP connect prober.
//!
//! Opens a plain TCP connection through the operating system's socket API
//! and closes it straight away. There is no timeout of our own; a silent
//! host holds the probe for as long as the network stack's connect timeout.

use crate::scanner::traits::{ProbeResult, Prober, Reachability};
use crate::types::Address;
use async_trait::async_trait;
use std::net::SocketAddrV4;
use std::time::Instant;
use tokio::net::TcpStream;
use tracing::trace;

/// TCP connect prober.
///
/// Does not require elevated privileges.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnectProber;

impl TcpConnectProber {
    /// Create a new TCP connect prober.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Prober for TcpConnectProber {
    async fn probe(&self, address: &Address, port: u16) -> ProbeResult {
        // Connect by numeric value; octet text such as "010" is display-only
        let addr = SocketAddrV4::new(address.to_ipv4(), port);
        let start = Instant::now();

        let status = match TcpStream::connect(addr).await {
            Ok(stream) => {
                drop(stream);
                Reachability::Available
            }
            Err(e) => {
                trace!(%addr, error = %e, "connect failed");
                Reachability::Unavailable
            }
        };

        let response_time = start.elapsed().as_millis() as u64;
        ProbeResult::new(address.clone(), port, status).with_response_time(response_time)
    }
}
