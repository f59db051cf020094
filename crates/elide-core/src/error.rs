//! Shared error type across elide crates.

use thiserror::Error;

use crate::level::valid_names;

/// Stable error codes reported by tools embedding elide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Threshold token is neither an integer nor a known level name.
    UnknownLevelName,
    /// Malformed or inconsistent configuration.
    InvalidConfig,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// Config could not be read.
    Io,
}

impl ErrorCode {
    /// String representation used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::UnknownLevelName => "UNKNOWN_LEVEL_NAME",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Io => "IO",
        }
    }

    /// Process exit code for command-line hosts.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorCode::Io => 1,
            ErrorCode::UnknownLevelName
            | ErrorCode::InvalidConfig
            | ErrorCode::UnsupportedVersion => 2,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ElideError>;

/// Unified error type used by core and driver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElideError {
    #[error("unknown elision level `{0}` (expected an integer or one of: {names})", names = valid_names())]
    UnknownLevelName(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version {0} (expected 1)")]
    UnsupportedVersion(u32),
    #[error("io: {0}")]
    Io(String),
}

impl ElideError {
    /// Map an error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ElideError::UnknownLevelName(_) => ErrorCode::UnknownLevelName,
            ElideError::Config(_) => ErrorCode::InvalidConfig,
            ElideError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            ElideError::Io(_) => ErrorCode::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_message_echoes_token_and_names() {
        let msg = ElideError::UnknownLevelName("BOGUS".into()).to_string();
        assert!(msg.contains("`BOGUS`"));
        assert!(msg.contains("FINEST"));
        assert!(msg.contains("MAXIMUM"));
    }

    #[test]
    fn config_errors_exit_with_two() {
        assert_eq!(ElideError::UnknownLevelName("x".into()).code().exit_code(), 2);
        assert_eq!(ElideError::UnsupportedVersion(3).code().exit_code(), 2);
        assert_eq!(ElideError::Io("gone".into()).code().exit_code(), 1);
        assert_eq!(ElideError::Config("bad".into()).code().as_str(), "INVALID_CONFIG");
    }
}
