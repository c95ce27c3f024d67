//! Argon2-backed login credentials.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Hashing error: {0}")]
    HashingError(String),
}

/// The single operator account configured through the environment.
///
/// Only the Argon2 hash of the password is kept.
pub struct LoginCredentials {
    username: String,
    password_hash: String,
    argon2: Argon2<'static>,
}

impl LoginCredentials {
    /// Hash `password` and keep it alongside `username`.
    pub fn new(username: impl Into<String>, password: &str) -> Result<Self, AuthError> {
        let argon2 = Argon2::default();
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(Self {
            username: username.into(),
            password_hash,
            argon2,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check a login attempt.
    pub fn verify(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username != self.username {
            return Err(AuthError::InvalidCredentials);
        }

        let parsed_hash = PasswordHash::new(&self.password_hash)
            .map_err(|e| AuthError::HashingError(e.to_string()))?;

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let credentials = LoginCredentials::new("operator", "secure_password_123").unwrap();

        assert!(credentials.verify("operator", "secure_password_123").is_ok());
        assert!(matches!(
            credentials.verify("operator", "wrong_password"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            credentials.verify("someone", "secure_password_123"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_plaintext_is_not_kept() {
        let credentials = LoginCredentials::new("operator", "hunter22").unwrap();
        assert!(!credentials.password_hash.contains("hunter22"));
        assert!(credentials.password_hash.starts_with("$argon2"));
    }
}
