use bytes::Bytes;
use serde::Serialize;
use wirefmt_frame::{declared_length, decode_frame, decode_frame_no_length, FrameError, RawCodec};

use crate::cmd::{read_input, DecodeArgs};
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{payload_preview, print_records, OutputFormat, Record};

#[derive(Serialize)]
struct DecodeOutput {
    empty: bool,
    declared_length: Option<u32>,
    body_size: usize,
    body: String,
    body_hex: String,
    #[serde(skip)]
    raw_body: Bytes,
}

impl DecodeOutput {
    fn new(declared_length: Option<u32>, body: Option<Bytes>) -> Self {
        let raw_body = body.clone().unwrap_or_default();
        Self {
            empty: body.is_none(),
            declared_length,
            body_size: raw_body.len(),
            body: payload_preview(&raw_body),
            body_hex: hex::encode(&raw_body),
            raw_body,
        }
    }
}

impl Record for DecodeOutput {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("empty", self.empty.to_string()),
            (
                "declared_length",
                self.declared_length
                    .map_or_else(|| "-".to_string(), |len| len.to_string()),
            ),
            ("body_size", self.body_size.to_string()),
            ("body", self.body.clone()),
        ]
    }

    fn raw(&self) -> Vec<u8> {
        self.raw_body.to_vec()
    }
}

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let input = read_input(None, args.hex.as_deref(), args.file.as_deref())?;

    let output = decode_input(&input, args.no_length).map_err(|err| {
        tracing::error!(error = %err, input_len = input.len(), "failed to decode frame");
        frame_error("decode failed", err)
    })?;

    print_records(&[output], format);
    Ok(SUCCESS)
}

fn decode_input(input: &[u8], no_length: bool) -> Result<DecodeOutput, FrameError> {
    if no_length {
        let body = decode_frame_no_length(&RawCodec, input)?;
        return Ok(DecodeOutput::new(None, body));
    }
    let declared = declared_length(input)?;
    let body = decode_frame(&RawCodec, input)?;
    Ok(DecodeOutput::new(declared, body))
}

#[cfg(test)]
mod tests {
    use wirefmt_frame::encode_frame;

    use super::*;

    #[test]
    fn decodes_framed_payload() {
        let frame = encode_frame(b"hello");
        let output = decode_input(&frame, false).unwrap();
        assert!(!output.empty);
        assert_eq!(output.declared_length, Some(5));
        assert_eq!(output.body, "hello");
        assert_eq!(output.body_hex, "68656c6c6f");
    }

    #[test]
    fn zero_length_header_is_empty() {
        let output = decode_input(&[0, 0, 0, 0], false).unwrap();
        assert!(output.empty);
        assert_eq!(output.declared_length, Some(0));
        assert_eq!(output.body_size, 0);
    }

    #[test]
    fn no_length_uses_whole_input() {
        let output = decode_input(b"\x00\x00\x00\x04abcd", true).unwrap();
        assert_eq!(output.declared_length, None);
        assert_eq!(output.body_size, 8);
    }

    #[test]
    fn header_without_body_fails() {
        let err = decode_input(&[0, 0, 0, 4], false).err().unwrap();
        assert!(matches!(err, FrameError::MissingBody { declared: 4 }));
    }
}
