//! In-memory account service used to seed sessions during local play.
//!
//! Holds a user directory and the access tokens issued by login. Nothing is persisted.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use doubleup_types::api::UserResponse;
use uuid::Uuid;

mod api;

pub use api::Api;

/// Suffix a password must carry after the user id to log in.
pub const PASSWORD_SUFFIX: &str = "_password";

/// User seeded into a default directory.
pub const DEFAULT_USER_ID: &str = "userId1";
pub const DEFAULT_USER_NAME: &str = "userName1";
pub const DEFAULT_USER_BALANCE: f64 = 2_000.0;

#[derive(Clone, Debug, PartialEq)]
pub struct UserRecord {
    pub user_id: String,
    pub user_name: String,
    pub balance: f64,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            user_id: record.user_id,
            user_name: record.user_name,
            balance: record.balance,
        }
    }
}

#[derive(Default)]
pub struct Simulator {
    users: RwLock<HashMap<String, UserRecord>>,
    tokens: RwLock<HashMap<String, String>>,
}

impl Simulator {
    /// Empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding the default demo user.
    pub fn with_default_users() -> Self {
        let simulator = Self::new();
        simulator.insert_user(UserRecord {
            user_id: DEFAULT_USER_ID.to_string(),
            user_name: DEFAULT_USER_NAME.to_string(),
            balance: DEFAULT_USER_BALANCE,
        });
        simulator
    }

    pub fn insert_user(&self, record: UserRecord) {
        self.users_mut().insert(record.user_id.clone(), record);
    }

    pub fn user(&self, user_id: &str) -> Option<UserRecord> {
        self.users().get(user_id).cloned()
    }

    pub fn user_count(&self) -> usize {
        self.users().len()
    }

    /// Issue an access token when the user exists and the password matches.
    ///
    /// Each user holds at most one token; logging in again revokes the previous one.
    pub fn login(&self, user_id: &str, password: &str) -> Option<String> {
        if !self.users().contains_key(user_id) {
            return None;
        }
        if password.strip_suffix(PASSWORD_SUFFIX) != Some(user_id) {
            return None;
        }
        let token = Uuid::new_v4().to_string();
        let mut tokens = self.tokens_mut();
        tokens.retain(|_, owner| owner.as_str() != user_id);
        tokens.insert(token.clone(), user_id.to_string());
        Some(token)
    }

    /// User an access token was issued to.
    pub fn token_owner(&self, token: &str) -> Option<String> {
        self.tokens().get(token).cloned()
    }

    fn users(&self) -> RwLockReadGuard<'_, HashMap<String, UserRecord>> {
        self.users.read().unwrap_or_else(|poisoned| {
            tracing::warn!("user directory lock poisoned; recovering");
            poisoned.into_inner()
        })
    }

    fn users_mut(&self) -> RwLockWriteGuard<'_, HashMap<String, UserRecord>> {
        self.users.write().unwrap_or_else(|poisoned| {
            tracing::warn!("user directory lock poisoned; recovering");
            poisoned.into_inner()
        })
    }

    fn tokens(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.tokens.read().unwrap_or_else(|poisoned| {
            tracing::warn!("token table lock poisoned; recovering");
            poisoned.into_inner()
        })
    }

    fn tokens_mut(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.tokens.write().unwrap_or_else(|poisoned| {
            tracing::warn!("token table lock poisoned; recovering");
            poisoned.into_inner()
        })
    }
}
