//! Mock session validator for tests.
//!
//! Accepts exactly the tokens registered on it; everything else is an
//! `InvalidToken`. A forced failure can be installed to exercise error
//! paths such as an unreachable auth service.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// In-memory token-to-user map implementing `SessionValidator`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    sessions: Mutex<HashMap<String, AuthenticatedUser>>,
    failure: Mutex<Option<AuthError>>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token that validates to the given user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.sessions.lock().unwrap().insert(token.into(), user);
        self
    }

    /// Registers a token for a generated test user with the given id.
    pub fn with_test_user(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let user = AuthenticatedUser::new(
            UserId::new(&user_id).unwrap(),
            format!("{}@test.example.com", user_id),
            Some(format!("Test User {}", user_id)),
        );
        self.with_user(token, user)
    }

    /// Makes every validation fail with the given error until `recover`.
    pub fn fail_with(self, error: AuthError) -> Self {
        *self.failure.lock().unwrap() = Some(error);
        self
    }

    /// Clears a forced failure.
    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Invalidates a previously registered token.
    pub fn revoke(&self, token: &str) {
        self.sessions.lock().unwrap().remove(token);
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self.failure.lock().unwrap().as_ref() {
            return Err(error.clone());
        }

        self.sessions
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
