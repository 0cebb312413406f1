use serde::Serialize;
use wirefmt_frame::{transform_length, write_length};

use crate::cmd::LengthArgs;
use crate::exit::{CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_records, OutputFormat, Record};

#[derive(Serialize)]
struct LengthOutput {
    value: u32,
    transformed: u32,
    transformed_hex: String,
    header_hex: String,
}

impl Record for LengthOutput {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("value", self.value.to_string()),
            ("transformed", self.transformed.to_string()),
            ("transformed_hex", self.transformed_hex.clone()),
            ("header_hex", self.header_hex.clone()),
        ]
    }

    fn raw(&self) -> Vec<u8> {
        write_length(self.value).to_vec()
    }
}

pub fn run(args: LengthArgs, format: OutputFormat) -> CliResult<i32> {
    let value = parse_u32(&args.value)?;
    let transformed = transform_length(value);
    let output = LengthOutput {
        value,
        transformed,
        transformed_hex: format!("0x{transformed:08x}"),
        header_hex: hex::encode(write_length(value)),
    };
    print_records(&[output], format);
    Ok(SUCCESS)
}

fn parse_u32(input: &str) -> CliResult<u32> {
    let input = input.trim();
    let parsed = match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(digits) => u32::from_str_radix(digits, 16),
        None => input.parse(),
    };
    parsed.map_err(|err| CliError::new(USAGE, format!("invalid 32-bit length {input:?}: {err}")))
}
