//! # psc - Port Scan across an IPv4 range
//!
//! psc checks whether a single TCP port accepts connections on each address
//! of a contiguous IPv4 range, one address at a time, printing one line per
//! address.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use psc::cli::resolve_args;
//! use psc::scanner::run_scan;
//!
//! #[tokio::main]
//! async fn main() {
//!     let request = resolve_args(["psc", "192.168.1.1", "192.168.1.20", "22"]).unwrap();
//!     let summary = run_scan(&request, &mut std::io::stdout()).await.unwrap();
//!     println!("{} of {} reachable", summary.available, summary.probed);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - `Address` parsing and stepping, `ScanRequest`
//! - [`cli`] - Argument parsing and resolution into a `ScanRequest`
//! - [`scanner`] - The `Prober` trait, TCP connect prober and scan driver
//! - [`output`] - Result and usage line formatting
//! - [`error`] - Error types

pub mod cli;
pub mod error;
pub mod output;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use error::{AddressError, CliError, ScanError};
pub use scanner::{ProbeResult, Prober, Reachability, ScanDriver, ScanSummary};
pub use types::{Address, ScanRequest};
