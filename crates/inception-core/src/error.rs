//! Shared error types across inception crates.

use thiserror::Error;

/// Stable error codes (used in logs and tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid configuration value or malformed config file.
    BadConfig,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// Upstream target discovery failed.
    FetchFailed,
    /// Two collectors describe the same metric family differently.
    DescriptorConflict,
    /// I/O failure (bind, serve, read).
    Io,
}

impl ErrorCode {
    /// String representation used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::FetchFailed => "FETCH_FAILED",
            ErrorCode::DescriptorConflict => "DESCRIPTOR_CONFLICT",
            ErrorCode::Io => "IO",
        }
    }
}

/// Which stage of a poll failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    RequestBuild,
    Network,
    Decode,
}

impl FetchErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FetchErrorKind::RequestBuild => "request_build",
            FetchErrorKind::Network => "network",
            FetchErrorKind::Decode => "decode",
        }
    }
}

/// Failure of one upstream poll.
///
/// The exporter never branches on the variant; it only uses it for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("can't build upstream request: {0}")]
    RequestBuild(String),
    #[error("can't reach upstream api: {0}")]
    Network(String),
    #[error("can't decode upstream response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::RequestBuild(_) => FetchErrorKind::RequestBuild,
            FetchError::Network(_) => FetchErrorKind::Network,
            FetchError::Decode(_) => FetchErrorKind::Decode,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, InceptionError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum InceptionError {
    #[error("bad config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("descriptor conflict: {0}")]
    Registry(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl InceptionError {
    /// Map internal error to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            InceptionError::Config(_) => ErrorCode::BadConfig,
            InceptionError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            InceptionError::Fetch(_) => ErrorCode::FetchFailed,
            InceptionError::Registry(_) => ErrorCode::DescriptorConflict,
            InceptionError::Io(_) => ErrorCode::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_converts_and_keeps_message() {
        let err: InceptionError = FetchError::Network("connection refused".into()).into();
        assert_eq!(err.code().as_str(), "FETCH_FAILED");
        assert_eq!(err.to_string(), "can't reach upstream api: connection refused");
    }

    #[test]
    fn fetch_error_kind() {
        assert_eq!(FetchError::Decode("eof".into()).kind().as_str(), "decode");
        assert_eq!(
            FetchError::RequestBuild("bad uri".into()).kind(),
            FetchErrorKind::RequestBuild
        );
    }
}
