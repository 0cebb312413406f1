//! Length-prefixed message framing for the remote service wire format.
//!
//! Every message is framed with:
//! - A 4-byte length header holding the byte-reversed payload length
//! - The payload bytes, produced by a [`MessageCodec`]
//!
//! The header is never written with a native big-endian store: the length is
//! byte-reversed explicitly and then laid out little-endian, which is what the
//! remote peer expects on every host.

pub mod byte_order;
pub mod codec;
pub mod error;
pub mod message;

pub use byte_order::{read_length, transform_length, write_length};
pub use codec::{
    decode_frame, decode_frame_no_length, decode_frame_no_length_or_log, decode_frame_or_log,
    declared_length, encode_frame, encode_frame_into, encode_message, FrameConfig,
    DEFAULT_MAX_PAYLOAD, HEADER_SIZE,
};
pub use error::{FrameError, Result};
pub use message::{JsonCodec, MessageCodec, RawCodec};
