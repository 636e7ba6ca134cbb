//! User Fixtures

use std::path::Path;

use serde::Deserialize;

use crate::{
    domain::users::records::{UserRecord, UserUuid},
    fixtures::{FixtureError, load_yaml},
};

const DEFAULT_USERS: &str = include_str!("../../../fixtures/users.yaml");

/// Wrapper for users in YAML
#[derive(Debug, Deserialize)]
pub struct UsersFixture {
    pub users: Vec<UserFixture>,
}

/// User Fixture
#[derive(Debug, Deserialize)]
pub struct UserFixture {
    pub uuid: UserUuid,
    pub name: String,
    pub email: String,

    /// Bearer token identifying the user
    pub token: String,
}

impl UserFixture {
    /// Split into the bearer token and the user it authenticates.
    ///
    /// # Errors
    ///
    /// Returns an error when the token is blank.
    pub fn into_token_and_user(self) -> Result<(String, UserRecord), FixtureError> {
        let token = self.token.trim().to_string();

        if token.is_empty() {
            return Err(FixtureError::EmptyToken(self.uuid.to_string()));
        }

        Ok((
            token,
            UserRecord {
                uuid: self.uuid,
                name: self.name,
                email: self.email,
            },
        ))
    }
}

/// Load users from `path`, or the built-in demo users.
///
/// # Errors
///
/// Returns an error if the fixture cannot be read or parsed, or a token is blank.
pub fn load_users(path: Option<&Path>) -> Result<Vec<(String, UserRecord)>, FixtureError> {
    let fixture: UsersFixture = load_yaml(path, DEFAULT_USERS)?;

    fixture
        .users
        .into_iter()
        .map(UserFixture::into_token_and_user)
        .collect()
}
