use bytes::BytesMut;
use serde::Serialize;
use wirefmt_frame::{encode_frame_into, FrameConfig, HEADER_SIZE};

use crate::cmd::{read_input, EncodeArgs};
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{print_records, OutputFormat, Record};

#[derive(Serialize)]
struct EncodeOutput {
    payload_size: usize,
    frame_size: usize,
    header_hex: String,
    frame_hex: String,
    #[serde(skip)]
    frame: Vec<u8>,
}

impl Record for EncodeOutput {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("payload_size", self.payload_size.to_string()),
            ("frame_size", self.frame_size.to_string()),
            ("header_hex", self.header_hex.clone()),
            ("frame_hex", self.frame_hex.clone()),
        ]
    }

    fn raw(&self) -> Vec<u8> {
        self.frame.clone()
    }
}

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let payload = read_input(
        args.data.as_deref(),
        args.hex.as_deref(),
        args.file.as_deref(),
    )?;

    let mut config = FrameConfig::default();
    if let Some(max) = args.max_payload {
        config.max_payload_size = max;
    }

    let mut frame = BytesMut::new();
    encode_frame_into(&payload, &mut frame, &config)
        .map_err(|err| frame_error("encode failed", err))?;
    tracing::debug!(payload_size = payload.len(), "encoded frame");

    let output = EncodeOutput {
        payload_size: payload.len(),
        frame_size: frame.len(),
        header_hex: hex::encode(&frame[..HEADER_SIZE]),
        frame_hex: hex::encode(&frame),
        frame: frame.to_vec(),
    };
    print_records(&[output], format);
    Ok(SUCCESS)
}
