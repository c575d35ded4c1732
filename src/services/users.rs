//! Account registration and authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{SignupForm, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new account from the signup form
    pub async fn register(&self, signup: &SignupForm) -> AppResult<User> {
        validate_signup(signup)?;

        if self.repository.users.email_exists(&signup.email).await? {
            return Err(AppError::Conflict(
                "Email already registered. Please log in.".to_string(),
            ));
        }

        let hash = self.hash_password(&signup.password)?;
        let user = self.repository.users.create(signup, &hash).await?;

        tracing::info!("New account registered: {}", user.email);

        Ok(user)
    }

    /// Authenticate by email and password, returning the account on success.
    ///
    /// The wrong-password message never reveals whether the email exists.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self
            .repository
            .users
            .get_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::UnknownAccount("User is not registered, sign up instead".to_string())
            })?;

        if !self.verify_password(&user, password)? {
            return Err(AppError::Authentication(
                "Invalid email or password".to_string(),
            ));
        }

        Ok(user)
    }

    /// Verify user password
    fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&user.password)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using Argon2
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }
}

/// Form-level signup checks, before any database access.
///
/// A blank confirmation field is reported as a mismatch rather than a
/// missing field, since the password itself was provided.
fn validate_signup(signup: &SignupForm) -> AppResult<()> {
    let any_blank = [
        &signup.first_name,
        &signup.last_name,
        &signup.email,
        &signup.password,
    ]
    .iter()
    .any(|field| field.trim().is_empty());

    if any_blank {
        return Err(AppError::Validation(
            "Please fill in all fields!".to_string(),
        ));
    }

    signup.validate().map_err(|_| {
        AppError::Validation("Please enter a valid email address!".to_string())
    })?;

    if signup.password != signup.confirm_password {
        return Err(AppError::Validation("Passwords do not match!".to_string()));
    }

    Ok(())
}
