//! Error types for the `domain` layer.
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors in the domain layer are modeled as a root `Error` holding an
/// `error_kind` tree describing what went wrong, with `source` carrying the
/// original error that caused it. The `web` layer matches on the kinds to pick
/// HTTP status codes and response bodies without depending on `reqwest`
/// directly.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    /// Failures local to this process, before any upstream call completes.
    /// Carries the local error message.
    Internal(String),
    External(ExternalErrorKind),
}

/// Enum representing the kinds of upstream failures the gateway can observe.
#[derive(Debug, PartialEq)]
pub enum ExternalErrorKind {
    /// The request never produced an HTTP response (connect failure, timeout).
    Network,
    /// The upstream answered with a non-success status.
    Api { status: u16, message: String },
    /// The upstream answered 2xx but the body was not usable.
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Domain Error: {self:?}")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Errors that result from issues building the reqwest::Client instance. This
        // type of error will occur prior to any network calls being made.
        if err.is_builder() {
            Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::Internal(
                    "Failed to build reqwest client".to_string(),
                ),
            }
        // Errors that result from issues with the network call itself.
        } else {
            Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
            }
        }
    }
}
