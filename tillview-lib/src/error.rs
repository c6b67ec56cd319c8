//! Error types

/// Errors raised by the browsing engine itself.
///
/// The engine tolerates almost everything: out-of-range page numbers clamp,
/// selection toggles for absent keys are no-ops. The only thing it rejects
/// is a caller breaking its contract outright.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrowseError {
    /// A caller supplied an argument outside the engine's contract,
    /// e.g. a page size of zero.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the violated contract.
        message: String,
    },
}

impl BrowseError {
    /// Creates a new invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Errors raised by data-source collaborators.
///
/// These never originate inside the engine. When a fetch fails, the engine's
/// state is left exactly as it was (last-known-good); the error is reported
/// to the presentation layer instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    /// The source could not be reached at all.
    #[error("source unavailable: {message}")]
    Unavailable {
        /// Description of the failure.
        message: String,
    },

    /// The source answered with an error status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// The source answered, but the payload could not be decoded.
    #[error("response parse error: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },

    /// A mutation referenced a record the source does not hold.
    #[error("record not found: {message}")]
    NotFound {
        /// Description of the missing record.
        message: String,
    },
}

impl SourceError {
    /// Creates a new unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a new parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Creates a new not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}
