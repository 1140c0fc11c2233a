//! Command-line interface definitions for psc.
//!
//! Uses `clap` derive macros for the flag surface. The positional tokens are
//! collected as-is and resolved into a [`ScanRequest`] by hand, since their
//! meaning depends on how many there are.

use crate::error::{is_help_or_version, CliError, CliResult};
use crate::output;
use crate::scanner::run_scan;
use crate::types::{Address, ScanRequest};
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::io::Write;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Probe a TCP port across a contiguous range of IPv4 addresses.
#[derive(Parser, Debug)]
#[command(name = "psc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Probe TCP port reachability across an IPv4 address range", long_about = None)]
#[command(override_usage = "psc [-v]... <ip-from> [<ip-to>] <port>")]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// <ip-from> [<ip-to>] <port>
    #[arg(value_name = "ARGS", allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

impl Cli {
    /// Parse the full process argument list, program name included.
    pub fn try_parse_args<I, T>(args: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::try_parse_from(args)?)
    }

    /// Turn the positional tokens into a validated scan request.
    ///
    /// Two tokens mean `<ip> <port>`, three mean `<ip-from> <ip-to> <port>`.
    pub fn request(&self) -> CliResult<ScanRequest> {
        match self.tokens.as_slice() {
            [ip, port] => {
                let address = Address::parse(ip).map_err(CliError::InvalidStartAddress)?;
                Ok(ScanRequest::single(address, parse_port(port)?))
            }
            [from, to, port] => {
                let start = Address::parse(from).map_err(CliError::InvalidStartAddress)?;
                let end = Address::parse(to).map_err(CliError::InvalidEndAddress)?;
                Ok(ScanRequest::new(start, end, parse_port(port)?))
            }
            tokens => Err(CliError::InvalidArgumentCount(tokens.len())),
        }
    }
}

/// Resolve a process argument list straight into a scan request.
pub fn resolve_args<I, T>(args: I) -> CliResult<ScanRequest>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_args(args)?.request()
}

/// Install the stderr log subscriber; `-v` flags raise the level.
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("psc={level}")))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the whole program against a process argument list.
///
/// Help and version text, the usage line and result lines all go to `out`.
/// An unusable command line is not an error: it prints the usage line and
/// returns `Ok`.
pub async fn run<I, T, W>(args: I, out: &mut W) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match Cli::try_parse_args(args) {
        Ok(cli) => cli,
        Err(CliError::Syntax(e)) if is_help_or_version(&e) => {
            write!(out, "{}", e.render())?;
            out.flush()?;
            return Ok(());
        }
        Err(e) => {
            debug!(error = %e, "rejected arguments");
            output::write_usage(out)?;
            return Ok(());
        }
    };

    init_tracing(cli.verbose);

    let request = match cli.request() {
        Ok(request) => request,
        Err(e) => {
            debug!(error = %e, "rejected arguments");
            output::write_usage(out)?;
            return Ok(());
        }
    };

    run_scan(&request, out).await?;

    Ok(())
}

/// Parse a port token as a plain unsigned base-10 16-bit integer.
fn parse_port(token: &str) -> CliResult<u16> {
    // u16's FromStr tolerates a leading '+', a port token must be digits only
    if token.starts_with('+') {
        return Err(CliError::InvalidPort(token.to_string()));
    }

    token
        .parse()
        .map_err(|_| CliError::InvalidPort(token.to_string()))
}
