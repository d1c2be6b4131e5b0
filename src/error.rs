//! Domain errors raised by the catalog and user stores.

use folio_http::error::AppError;
use thiserror::Error;

/// Coarse error classes surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    BadRequest,
    Conflict,
    Unauthorized,
    InvalidCredentials,
}

/// Every failure a request can end in. The display text is the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FolioError {
    #[error("Book not found")]
    BookNotFound,

    #[error("No books found for this author")]
    NoBooksByAuthor,

    #[error("No books found for this title")]
    NoBooksWithTitle,

    #[error("Username and password required")]
    MissingCredentials,

    #[error("Username and review required")]
    MissingReview,

    #[error("User already exists")]
    UserExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The acting username was never registered
    #[error("Unauthorized user")]
    UnregisteredUser,
}

impl FolioError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FolioError::BookNotFound | FolioError::NoBooksByAuthor | FolioError::NoBooksWithTitle => {
                ErrorKind::NotFound
            }
            FolioError::MissingCredentials | FolioError::MissingReview => ErrorKind::BadRequest,
            FolioError::UserExists => ErrorKind::Conflict,
            FolioError::InvalidCredentials => ErrorKind::InvalidCredentials,
            FolioError::UnregisteredUser => ErrorKind::Unauthorized,
        }
    }
}

impl From<FolioError> for AppError {
    fn from(err: FolioError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::NotFound => AppError::not_found(message),
            ErrorKind::BadRequest => AppError::bad_request(message),
            // Duplicate usernames and failed logins are both reported as 400
            ErrorKind::Conflict => AppError::bad_request_with_code(message, "conflict"),
            ErrorKind::InvalidCredentials => {
                AppError::bad_request_with_code(message, "invalid_credentials")
            }
            ErrorKind::Unauthorized => AppError::unauthorized(message),
        }
    }
}
