/// Errors that can occur during frame encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The payload exceeds the configured maximum size.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// Fewer than four header bytes were available.
    #[error("truncated frame header ({available} of 4 bytes)")]
    TruncatedHeader { available: usize },

    /// The header declares a non-empty message but no body follows it.
    #[error("frame declares {declared} payload bytes but carries no body")]
    MissingBody { declared: u32 },

    /// The message codec rejected the frame body.
    #[error("message codec failed: {0}")]
    Codec(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl FrameError {
    pub(crate) fn codec<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Codec(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;
