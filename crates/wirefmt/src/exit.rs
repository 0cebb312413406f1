use std::fmt;
use std::io;

use wirefmt_format::FormatError;
use wirefmt_frame::FrameError;

// Exit codes follow sysexits where one fits.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match err {
        FrameError::PayloadTooLarge { .. } => CliError::new(USAGE, format!("{context}: {err}")),
        FrameError::TruncatedHeader { .. }
        | FrameError::MissingBody { .. }
        | FrameError::Codec(_) => CliError::new(DATA_INVALID, format!("{context}: {err}")),
    }
}

pub fn format_error(context: &str, err: FormatError) -> CliError {
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_errors_map_to_exit_codes() {
        let err = frame_error("decode", FrameError::MissingBody { declared: 4 });
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.starts_with("decode: "));

        let err = frame_error(
            "encode",
            FrameError::PayloadTooLarge { size: 10, max: 5 },
        );
        assert_eq!(err.code, USAGE);
    }

    #[test]
    fn io_errors_map_to_exit_codes() {
        let err = io_error("read", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.code, FAILURE);
        let err = io_error("read", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.code, PERMISSION_DENIED);
    }

    #[test]
    fn format_errors_are_data_invalid() {
        let err = format_error("slice", FormatError::SliceIdTooShort { len: 1 });
        assert_eq!(err.code, DATA_INVALID);
        assert_eq!(err.to_string(), "slice: slice id must have at least 2 characters (got 1)");
    }
}
