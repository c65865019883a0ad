use thiserror::Error;

/// Generic error type used by service layer functions.
///
/// Absence of a record is not an error: lookups return `Ok(None)` and
/// the HTTP layer renders that as a 200 with a `null` body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
