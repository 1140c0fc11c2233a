//! Scanner module - drives a scan across an address range.
//!
//! Probes run strictly one after another, from the start address up to and
//! including the end address, and each result line is written before the next
//! probe starts.

pub mod tcp;
pub mod traits;

use crate::error::ScanResult;
use crate::output;
use crate::types::{Address, ScanRequest};
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

pub use tcp::TcpConnectProber;
pub use traits::{ProbeResult, Prober, Reachability};

/// Totals gathered while a scan runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Number of addresses probed.
    pub probed: u64,
    /// Number of addresses that accepted a connection.
    pub available: u64,
    /// Whether the scan stopped because the address space ran out
    /// before the end address was reached.
    pub exhausted: bool,
}

/// Sequential scan driver.
pub struct ScanDriver<P> {
    prober: P,
}

impl<P: Prober> ScanDriver<P> {
    /// Create a driver that probes through `prober`.
    pub fn new(prober: P) -> Self {
        Self { prober }
    }

    /// Probe every address from `request.start` to `request.end` and write
    /// one line per address to `out`.
    ///
    /// The loop only stops at the end address or when the address space is
    /// exhausted, so an end address that stepping never reaches scans the
    /// rest of the address space.
    pub async fn run<W: Write>(
        &self,
        request: &ScanRequest,
        out: &mut W,
    ) -> ScanResult<ScanSummary> {
        let started = Instant::now();
        let mut summary = ScanSummary::default();
        let mut current: Address = request.start.clone();

        loop {
            let result = self.prober.probe(&current, request.port).await;
            debug!(
                address = %result.address,
                port = result.port,
                status = %result.status,
                response_time_ms = result.response_time_ms,
                "probe finished"
            );

            summary.probed += 1;
            if result.is_reachable() {
                summary.available += 1;
            }
            output::write_result(out, &result)?;

            if current == request.end {
                break;
            }

            // Stepping only fails once the address space is exhausted
            current = match current.next() {
                Ok(next) => next,
                Err(_) => {
                    debug!(last = %current, "address space exhausted");
                    summary.exhausted = true;
                    break;
                }
            };
        }

        let elapsed_ms = started.elapsed().as_millis() as u64;
        info!(
            probed = summary.probed,
            available = summary.available,
            exhausted = summary.exhausted,
            elapsed_ms,
            "scan complete"
        );

        Ok(summary)
    }
}

/// Execute a complete scan over TCP, writing result lines to `out`.
pub async fn run_scan<W: Write>(request: &ScanRequest, out: &mut W) -> ScanResult<ScanSummary> {
    info!(%request, "starting scan");

    ScanDriver::new(TcpConnectProber::new())
        .run(request, out)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use tokio::net::TcpListener;

    /// Answers from a fixed set of reachable addresses and records every probe.
    #[derive(Default)]
    struct ScriptedProber {
        reachable: HashSet<String>,
        probed: Mutex<Vec<String>>,
    }

    impl ScriptedProber {
        fn with_reachable(addresses: &[&str]) -> Self {
            Self {
                reachable: addresses.iter().map(|s| s.to_string()).collect(),
                probed: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Prober for ScriptedProber {
        async fn probe(&self, address: &Address, port: u16) -> ProbeResult {
            let text = address.to_string();
            self.probed.lock().unwrap().push(text.clone());
            let status = self.reachable.contains(&text).into();
            ProbeResult::new(address.clone(), port, status)
        }
    }

    fn request(start: &str, end: &str, port: u16) -> ScanRequest {
        ScanRequest::new(
            Address::parse(start).unwrap(),
            Address::parse(end).unwrap(),
            port,
        )
    }

    async fn scan_lines<P: Prober>(
        driver: &ScanDriver<P>,
        request: &ScanRequest,
    ) -> (Vec<String>, ScanSummary) {
        let mut out = Vec::new();
        let summary = driver.run(request, &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();
        (text.lines().map(str::to_string).collect(), summary)
    }

    #[tokio::test]
    async fn test_single_address_probed_once() {
        let driver = ScanDriver::new(ScriptedProber::default());
        let (lines, summary) = scan_lines(&driver, &request("10.0.0.1", "10.0.0.1", 80)).await;

        assert_eq!(lines, vec!["unavailable 10.0.0.1:80"]);
        assert_eq!(summary.probed, 1);
        assert!(!summary.exhausted);
    }

    #[tokio::test]
    async fn test_range_is_inclusive_and_ordered() {
        let driver = ScanDriver::new(ScriptedProber::with_reachable(&["10.0.0.2"]));
        let (lines, summary) = scan_lines(&driver, &request("10.0.0.1", "10.0.0.3", 22)).await;

        assert_eq!(
            lines,
            vec![
                "unavailable 10.0.0.1:22",
                "AVAILABLE 10.0.0.2:22",
                "unavailable 10.0.0.3:22",
            ]
        );
        assert_eq!(
            summary,
            ScanSummary {
                probed: 3,
                available: 1,
                exhausted: false,
            }
        );
    }

    #[tokio::test]
    async fn test_range_follows_carry_rule() {
        let driver = ScanDriver::new(ScriptedProber::default());
        let (lines, _) = scan_lines(&driver, &request("10.0.0.254", "10.0.1.2", 80)).await;

        assert_eq!(
            lines,
            vec![
                "unavailable 10.0.0.254:80",
                "unavailable 10.0.0.255:80",
                "unavailable 10.0.1.1:80",
                "unavailable 10.0.1.2:80",
            ]
        );
    }

    #[tokio::test]
    async fn test_exhaustion_ends_scan_silently() {
        let driver = ScanDriver::new(ScriptedProber::default());
        let (lines, summary) =
            scan_lines(&driver, &request("255.255.255.254", "1.0.0.0", 443)).await;

        assert_eq!(
            lines,
            vec![
                "unavailable 255.255.255.254:443",
                "unavailable 255.255.255.255:443",
            ]
        );
        assert!(summary.exhausted);
        assert_eq!(
            *driver.prober.probed.lock().unwrap(),
            vec!["255.255.255.254", "255.255.255.255"]
        );
    }

    /// A sink whose every write fails, like stdout after the reader went away.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_write_failure_stops_scan() {
        let driver = ScanDriver::new(ScriptedProber::default());
        let result = driver
            .run(&request("10.0.0.1", "10.0.0.9", 80), &mut ClosedPipe)
            .await;

        assert!(matches!(result, Err(crate::error::ScanError::Io(_))));
        assert_eq!(*driver.prober.probed.lock().unwrap(), vec!["10.0.0.1"]);
    }

    #[tokio::test]
    async fn test_end_to_end_nothing_listening() {
        // Bind then release so nothing listens on the port anywhere on loopback
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };

        let mut out = Vec::new();
        let summary = run_scan(&request("127.0.0.1", "127.0.0.3", port), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let expected = format!(
            "unavailable 127.0.0.1:{port}\nunavailable 127.0.0.2:{port}\nunavailable 127.0.0.3:{port}\n"
        );
        assert_eq!(text, expected);
        assert_eq!(summary.available, 0);
    }

    #[tokio::test]
    async fn test_end_to_end_listening_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let mut out = Vec::new();
        let summary = run_scan(&request("127.0.0.1", "127.0.0.1", port), &mut out)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("AVAILABLE 127.0.0.1:{port}\n")
        );
        assert_eq!(summary.available, 1);
    }
}
