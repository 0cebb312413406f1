use serde::Serialize;
use wirefmt_format::format_size_with_precision;

use crate::cmd::SizeArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_records, OutputFormat, Record};

#[derive(Serialize)]
struct SizeOutput {
    bytes: u64,
    precision: u32,
    formatted: String,
}

impl Record for SizeOutput {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("bytes", self.bytes.to_string()),
            ("precision", self.precision.to_string()),
            ("formatted", self.formatted.clone()),
        ]
    }

    fn raw(&self) -> Vec<u8> {
        format!("{}\n", self.formatted).into_bytes()
    }
}

pub fn run(args: SizeArgs, format: OutputFormat) -> CliResult<i32> {
    let output = SizeOutput {
        bytes: args.bytes,
        precision: args.precision,
        formatted: format_size_with_precision(args.bytes, args.precision),
    };
    print_records(&[output], format);
    Ok(SUCCESS)
}
