//! Core type definitions.
//!
//! `Address` carries the parsing and stepping rules for IPv4 addresses;
//! `ScanRequest` is the validated input to a scan.

mod address;
mod request;

pub use address::Address;
pub use request::ScanRequest;
