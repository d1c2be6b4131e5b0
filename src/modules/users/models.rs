use serde::Deserialize;

/// A registered account.
///
/// The password is stored and compared verbatim. A password hash with
/// constant-time comparison and a real session mechanism are required before
/// this is exposed anywhere that matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}

/// Request body shared by `/register` and `/login`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}
