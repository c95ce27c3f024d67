//! Dashboard login.

mod password;

pub use password::{AuthError, LoginCredentials};
