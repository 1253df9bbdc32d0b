use huddle_domain::id::UserId;

use crate::domain::repository::{NewUser, UserRepository};
use crate::domain::types::{User, validate_username};
use crate::error::SessionsServiceError;

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

pub struct RegisterUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterUserUseCase<R> {
    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, SessionsServiceError> {
        if input.email.is_empty() || input.password_hash.is_empty() {
            return Err(SessionsServiceError::MissingData);
        }
        if !validate_username(&input.username) {
            return Err(SessionsServiceError::InvalidUsername);
        }
        self.repo
            .create(&NewUser {
                email: input.email,
                username: input.username,
                password_hash: input.password_hash,
            })
            .await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: UserId) -> Result<User, SessionsServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(SessionsServiceError::UserNotFound)
    }
}

// ── GetUserByEmail ───────────────────────────────────────────────────────────

/// Credential lookup for the authentication collaborator: email, not
/// username, identifies an account.
pub struct GetUserByEmailUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserByEmailUseCase<R> {
    pub async fn execute(&self, email: &str) -> Result<User, SessionsServiceError> {
        self.repo
            .find_by_email(email)
            .await?
            .ok_or(SessionsServiceError::UserNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileInput {
    pub username: Option<String>,
    pub email: Option<String>,
}

pub struct UpdateProfileUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateProfileUseCase<R> {
    pub async fn execute(
        &self,
        user_id: UserId,
        input: UpdateProfileInput,
    ) -> Result<(), SessionsServiceError> {
        if input.username.is_none() && input.email.is_none() {
            return Err(SessionsServiceError::MissingData);
        }
        if let Some(ref username) = input.username {
            if !validate_username(username) {
                return Err(SessionsServiceError::InvalidUsername);
            }
        }
        self.repo
            .update_profile(user_id, input.username.as_deref(), input.email.as_deref())
            .await
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    pub async fn execute(&self, user_id: UserId) -> Result<(), SessionsServiceError> {
        self.repo.delete(user_id).await
    }
}
