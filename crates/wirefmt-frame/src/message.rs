//! Structured message codecs for frame bodies.
//!
//! The framing layer never inspects payload contents. It hands the body to a
//! [`MessageCodec`], which owns the message schema:
//!
//! - [`RawCodec`] - Pass-through for raw bytes
//! - [`JsonCodec`] - JSON via `serde_json` for any serde message type

use std::convert::Infallible;
use std::marker::PhantomData;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Parses frame bodies into typed messages and serializes them back.
pub trait MessageCodec<T> {
    /// Error returned when a body cannot be parsed or a message serialized.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Parse a frame body into a message.
    fn parse(&self, bytes: &[u8]) -> Result<T, Self::Error>;

    /// Serialize a message into a frame body.
    fn serialize(&self, message: &T) -> Result<Vec<u8>, Self::Error>;
}

/// Raw codec that passes bytes through without transformation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawCodec;

impl MessageCodec<Bytes> for RawCodec {
    type Error = Infallible;

    fn parse(&self, bytes: &[u8]) -> Result<Bytes, Self::Error> {
        Ok(Bytes::copy_from_slice(bytes))
    }

    fn serialize(&self, message: &Bytes) -> Result<Vec<u8>, Self::Error> {
        Ok(message.to_vec())
    }
}

/// JSON codec for serde message types.
///
/// An empty body is not valid JSON, so a header that declares a message
/// with nothing behind it fails to parse.
pub struct JsonCodec<T> {
    _message: PhantomData<fn() -> T>,
}

impl<T> JsonCodec<T> {
    pub fn new() -> Self {
        Self {
            _message: PhantomData,
        }
    }
}

impl<T> Default for JsonCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonCodec<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for JsonCodec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonCodec").finish()
    }
}

impl<T> MessageCodec<T> for JsonCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    type Error = serde_json::Error;

    fn parse(&self, bytes: &[u8]) -> Result<T, Self::Error> {
        serde_json::from_slice(bytes)
    }

    fn serialize(&self, message: &T) -> Result<Vec<u8>, Self::Error> {
        serde_json::to_vec(message)
    }
}
