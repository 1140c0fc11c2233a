//! Output formatting.
//!
//! Standard output only ever carries result lines or the usage line; every
//! diagnostic goes through `tracing` to stderr.

use crate::scanner::ProbeResult;
use std::io::{self, Write};

/// Usage line printed for any unusable command line.
pub const USAGE: &str = "Usage: psc <ip-from> [<ip-to>] <port>";

/// Write one result line and flush it so it shows up before the next probe.
pub fn write_result<W: Write>(out: &mut W, result: &ProbeResult) -> io::Result<()> {
    writeln!(out, "{}", result)?;
    out.flush()
}

/// Write the usage line.
pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", USAGE)?;
    out.flush()
}
