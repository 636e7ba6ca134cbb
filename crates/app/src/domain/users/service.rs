//! Users service.

use std::{fmt, path::Path, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    domain::users::{
        errors::UsersServiceError, fixtures::load_users, records::UserRecord,
    },
    fixtures::FixtureError,
    latency::SimulatedLatency,
};

/// Token-to-user lookup over a fixed set of demo users.
#[derive(Clone)]
pub struct InMemoryUsersService {
    by_token: Arc<FxHashMap<String, UserRecord>>,
    latency: SimulatedLatency,
}

impl fmt::Debug for InMemoryUsersService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryUsersService")
            .field("users_count", &self.by_token.len())
            .field("latency", &self.latency)
            .finish()
    }
}

impl InMemoryUsersService {
    /// Build the service from `(token, user)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error when a token or user uuid is used twice.
    pub fn new(
        users: Vec<(String, UserRecord)>,
        latency: SimulatedLatency,
    ) -> Result<Self, FixtureError> {
        let mut by_token = FxHashMap::default();
        let mut seen = FxHashSet::default();

        for (token, user) in users {
            if !seen.insert(user.uuid) {
                return Err(FixtureError::DuplicateUser(user.uuid.to_string()));
            }

            let uuid = user.uuid;

            if by_token.insert(token, user).is_some() {
                return Err(FixtureError::DuplicateUser(uuid.to_string()));
            }
        }

        Ok(Self {
            by_token: Arc::new(by_token),
            latency,
        })
    }

    /// Build the service from a YAML fixture, or the built-in demo users.
    ///
    /// # Errors
    ///
    /// Returns an error when the fixture cannot be loaded or contains duplicates.
    pub fn from_fixture(
        path: Option<&Path>,
        latency: SimulatedLatency,
    ) -> Result<Self, FixtureError> {
        Self::new(load_users(path)?, latency)
    }
}

#[async_trait]
impl UsersService for InMemoryUsersService {
    async fn authenticate_token(&self, token: String) -> Result<UserRecord, UsersServiceError> {
        self.latency.pause().await;

        self.by_token
            .get(token.trim())
            .cloned()
            .ok_or(UsersServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Resolve a bearer token to the user it belongs to.
    async fn authenticate_token(&self, token: String) -> Result<UserRecord, UsersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::users::records::UserUuid, test::TestContext};

    use super::*;

    #[tokio::test]
    async fn known_token_resolves_user() -> TestResult {
        let ctx = TestContext::new();

        let user = ctx.users.authenticate_token("alice-token".to_string()).await?;

        assert_eq!(user, ctx.alice);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_token_returns_not_found() {
        let ctx = TestContext::new();

        let result = ctx.users.authenticate_token("nope".to_string()).await;

        assert!(
            matches!(result, Err(UsersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[test]
    fn duplicate_tokens_are_rejected() {
        let user = |uuid| UserRecord {
            uuid,
            name: "Twin".to_string(),
            email: "twin@example.com".to_string(),
        };

        let result = InMemoryUsersService::new(
            vec![
                ("same".to_string(), user(UserUuid::new())),
                ("same".to_string(), user(UserUuid::new())),
            ],
            SimulatedLatency::NONE,
        );

        assert!(matches!(result, Err(FixtureError::DuplicateUser(_))));
    }
}
