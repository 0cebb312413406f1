//! Wire framing and display formatting primitives for the remote service client.
//!
//! # Crate Structure
//!
//! - [`frame`] — Byte-reversed length-prefixed framing and message codecs
//! - [`format`] — Human-readable sizes and slice hash buckets

/// Re-export frame types.
pub mod frame {
    pub use wirefmt_frame::*;
}

/// Re-export formatter types.
pub mod format {
    pub use wirefmt_format::*;
}
