use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use wirefmt_format::DEFAULT_PRECISION;

use crate::exit::{io_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod length;
pub mod size;
pub mod slice;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Format a byte count for humans.
    Size(SizeArgs),
    /// Map slice ids to their bucket symbols.
    Slice(SliceArgs),
    /// Frame a payload with its byte-reversed length header.
    Encode(EncodeArgs),
    /// Decode a frame and show its body.
    Decode(DecodeArgs),
    /// Byte-reverse a 32-bit length.
    Length(LengthArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Size(args) => size::run(args, format),
        Command::Slice(args) => slice::run(args, format),
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Length(args) => length::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct SizeArgs {
    /// Size in bytes.
    pub bytes: u64,
    /// Digits after the decimal point.
    #[arg(long, short = 'p', default_value_t = DEFAULT_PRECISION)]
    pub precision: u32,
}

#[derive(Args, Debug)]
pub struct SliceArgs {
    /// Slice ids; only the first two hex characters of each are used.
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Raw string payload.
    #[arg(long, conflicts_with_all = ["hex", "file"])]
    pub data: Option<String>,
    /// Hex-encoded payload.
    #[arg(long, conflicts_with_all = ["data", "file"])]
    pub hex: Option<String>,
    /// Read payload from file.
    #[arg(long, conflicts_with_all = ["data", "hex"])]
    pub file: Option<PathBuf>,
    /// Reject payloads larger than this many bytes.
    #[arg(long, value_name = "BYTES")]
    pub max_payload: Option<usize>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Hex-encoded frame.
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub hex: Option<String>,
    /// Read frame from file.
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Input has no length header (already stripped by the transport).
    #[arg(long)]
    pub no_length: bool,
}

#[derive(Args, Debug)]
pub struct LengthArgs {
    /// Length as decimal or 0x-prefixed hex.
    pub value: String,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Resolve bytes from exactly one of a hex string, a file or a text string.
pub(crate) fn read_input(
    data: Option<&str>,
    hex_input: Option<&str>,
    file: Option<&Path>,
) -> CliResult<Vec<u8>> {
    if let Some(encoded) = hex_input {
        return parse_hex(encoded);
    }
    if let Some(data) = data {
        return Ok(data.as_bytes().to_vec());
    }
    if let Some(path) = file {
        return fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    Ok(Vec::new())
}

pub(crate) fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    let compact = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);
    hex::decode(compact).map_err(|err| CliError::new(USAGE, format!("--hex is not valid hex: {err}")))
}
