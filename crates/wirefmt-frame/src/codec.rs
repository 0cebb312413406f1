use bytes::{BufMut, Bytes, BytesMut};
use tracing::{debug, error};

use crate::byte_order::{read_length, write_length};
use crate::error::{FrameError, Result};
use crate::message::MessageCodec;

/// Frame header: byte-reversed payload length (4).
pub const HEADER_SIZE: usize = 4;

/// Default maximum payload size: everything a 32-bit length can declare.
pub const DEFAULT_MAX_PAYLOAD: usize = u32::MAX as usize;

/// Configuration for checked frame encoding.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Maximum payload size in bytes. Default: `u32::MAX`.
    pub max_payload_size: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD,
        }
    }
}

/// Encode a payload into the wire format.
///
/// Wire format:
/// ```text
/// ┌──────────────────────┬─────────────────┐
/// │ Length (4B)          │ Payload         │
/// │ byte-reversed, LE    │ (Length bytes)  │
/// └──────────────────────┴─────────────────┘
/// ```
///
/// The payload length must fit in a `u32`; use [`encode_frame_into`] when the
/// length is not already known to be in range.
pub fn encode_frame(payload: &[u8]) -> Bytes {
    debug_assert!(
        payload.len() <= u32::MAX as usize,
        "payload length {} does not fit the 32-bit header",
        payload.len()
    );
    let mut dst = BytesMut::with_capacity(HEADER_SIZE + payload.len());
    dst.put_slice(&write_length(payload.len() as u32));
    dst.put_slice(payload);
    dst.freeze()
}

/// Encode a payload into `dst`, rejecting payloads above the configured limit.
pub fn encode_frame_into(payload: &[u8], dst: &mut BytesMut, config: &FrameConfig) -> Result<()> {
    let max = config.max_payload_size.min(DEFAULT_MAX_PAYLOAD);
    if payload.len() > max {
        return Err(FrameError::PayloadTooLarge {
            size: payload.len(),
            max,
        });
    }
    dst.reserve(HEADER_SIZE + payload.len());
    dst.put_slice(&write_length(payload.len() as u32));
    dst.put_slice(payload);
    Ok(())
}

/// Serialize a message with `codec` and frame the result.
pub fn encode_message<T, C>(codec: &C, message: &T) -> Result<Bytes>
where
    C: MessageCodec<T>,
{
    let body = codec.serialize(message).map_err(FrameError::codec)?;
    let mut dst = BytesMut::new();
    encode_frame_into(&body, &mut dst, &FrameConfig::default())?;
    Ok(dst.freeze())
}

/// Read the payload length a frame declares.
///
/// Returns `Ok(None)` for an empty buffer.
pub fn declared_length(frame: &[u8]) -> Result<Option<u32>> {
    if frame.is_empty() {
        return Ok(None);
    }
    let header: [u8; HEADER_SIZE] = frame
        .get(..HEADER_SIZE)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(FrameError::TruncatedHeader {
            available: frame.len(),
        })?;
    Ok(Some(read_length(header)))
}

/// Decode a length-prefixed frame into a message.
///
/// Returns `Ok(None)` for an empty buffer and for the empty-message sentinel
/// (a header declaring zero bytes). Everything after the header is handed to
/// `codec`; the declared length is not used to slice the body.
pub fn decode_frame<T, C>(codec: &C, frame: &[u8]) -> Result<Option<T>>
where
    C: MessageCodec<T>,
{
    let declared = match declared_length(frame)? {
        Some(0) => {
            debug!("frame declares an empty message");
            return Ok(None);
        }
        Some(declared) => declared,
        None => return Ok(None),
    };

    let body = &frame[HEADER_SIZE..];
    if body.is_empty() {
        return Err(FrameError::MissingBody { declared });
    }
    if body.len() != declared as usize {
        debug!(
            declared,
            actual = body.len(),
            "frame body length differs from header"
        );
    }

    codec.parse(body).map(Some).map_err(FrameError::codec)
}

/// Decode a frame whose length prefix was already stripped by the transport.
///
/// The whole buffer goes to `codec`, including an empty one; whether an empty
/// body is a valid message is up to the codec.
pub fn decode_frame_no_length<T, C>(codec: &C, body: &[u8]) -> Result<Option<T>>
where
    C: MessageCodec<T>,
{
    codec.parse(body).map(Some).map_err(FrameError::codec)
}

/// Decode a frame, logging any failure and reporting it as no message.
pub fn decode_frame_or_log<T, C>(codec: &C, frame: &[u8]) -> Option<T>
where
    C: MessageCodec<T>,
{
    decode_frame(codec, frame).unwrap_or_else(|err| {
        error!(error = %err, frame_len = frame.len(), "failed to decode frame");
        None
    })
}

/// Decode a prefix-less frame, logging any failure and reporting it as no message.
pub fn decode_frame_no_length_or_log<T, C>(codec: &C, body: &[u8]) -> Option<T>
where
    C: MessageCodec<T>,
{
    decode_frame_no_length(codec, body).unwrap_or_else(|err| {
        error!(error = %err, body_len = body.len(), "failed to decode frame body");
        None
    })
}
