use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

/// Error kinds for criteria construction and validation.
///
/// Rendering a criteria never fails; these kinds only surface from the
/// opt-in validation paths (`FilterExpression::try_new`,
/// `KeywordConfig::validate`, `Criteria::validate` and `CriteriaBuilder::build`).
///
/// # Examples
///
/// ```rust
/// use rsql_criteria::errors::{ErrorKind, RsqlError, RsqlResult};
///
/// fn example() -> RsqlResult<()> {
///     Err(RsqlError::new("field name is empty", ErrorKind::InvalidFieldName))
/// }
///
/// assert_eq!(example().unwrap_err().kind(), &ErrorKind::InvalidFieldName);
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// A filter expression was given an empty or blank field name
    InvalidFieldName,
    /// A keyword label is empty or collides with another label
    InvalidKeyword,
    /// A page size or page number of zero was supplied
    InvalidPagination,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidFieldName => write!(f, "Invalid field name"),
            ErrorKind::InvalidKeyword => write!(f, "Invalid keyword"),
            ErrorKind::InvalidPagination => write!(f, "Invalid pagination"),
        }
    }
}

/// Error type of the crate.
///
/// `RsqlError` carries a message, an [`ErrorKind`], an optional cause and the
/// backtrace captured at construction.
///
/// # Examples
///
/// ```rust
/// use rsql_criteria::errors::{ErrorKind, RsqlError};
///
/// let cause = RsqlError::new("page size must be positive", ErrorKind::InvalidPagination);
/// let err = RsqlError::new_with_cause("invalid criteria", ErrorKind::InvalidPagination, cause);
/// assert!(err.cause().is_some());
/// ```
#[derive(Clone)]
pub struct RsqlError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<RsqlError>>,
    backtrace: Backtrace,
}

impl RsqlError {
    /// Creates a new `RsqlError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        RsqlError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: Backtrace::new(),
        }
    }

    /// Creates a new `RsqlError` wrapping the error that caused it.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: RsqlError) -> Self {
        RsqlError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: Backtrace::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&RsqlError> {
        self.cause.as_deref()
    }
}

impl Display for RsqlError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for RsqlError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // message with stack trace, or followed by the cause chain
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace),
        }
    }
}

impl Error for RsqlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// Shorthand for `Result<T, RsqlError>`.
pub type RsqlResult<T> = Result<T, RsqlError>;
