use serde::Serialize;
use wirefmt_format::try_slice_hash_char;

use crate::cmd::SliceArgs;
use crate::exit::{format_error, CliResult, SUCCESS};
use crate::output::{print_records, OutputFormat, Record};

#[derive(Serialize)]
struct SliceOutput {
    slice_id: String,
    bucket: char,
}

impl Record for SliceOutput {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("slice_id", self.slice_id.clone()),
            ("bucket", self.bucket.to_string()),
        ]
    }

    fn raw(&self) -> Vec<u8> {
        format!("{}\n", self.bucket).into_bytes()
    }
}

pub fn run(args: SliceArgs, format: OutputFormat) -> CliResult<i32> {
    let outputs = args
        .ids
        .into_iter()
        .map(|slice_id| {
            let bucket = try_slice_hash_char(&slice_id)
                .map_err(|err| format_error("invalid slice id", err))?;
            Ok(SliceOutput { slice_id, bucket })
        })
        .collect::<CliResult<Vec<_>>>()?;

    print_records(&outputs, format);
    Ok(SUCCESS)
}
