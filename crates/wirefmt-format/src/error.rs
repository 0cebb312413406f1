/// Errors reported for malformed formatter input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The slice identifier has fewer than two characters.
    #[error("slice id must have at least 2 characters (got {len})")]
    SliceIdTooShort { len: usize },

    /// The first two characters of the slice identifier are not hex digits.
    #[error("slice id {id:?} does not start with two hex digits")]
    InvalidSliceHex { id: String },
}

pub type Result<T> = std::result::Result<T, FormatError>;
