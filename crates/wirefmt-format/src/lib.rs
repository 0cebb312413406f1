//! Display formatters shared by the client UI and logs.
//!
//! - [`size`] — byte counts rendered as `"321.6 GB"`
//! - [`slice`] — slice identifiers mapped to one of 32 bucket symbols

pub mod error;
pub mod size;
pub mod slice;

pub use error::{FormatError, Result};
pub use size::{format_size, format_size_with_precision, SizeDisplay, DEFAULT_PRECISION, UNITS};
pub use slice::{slice_hash_char, try_slice_hash_char, BASE32_ALPHABET};
