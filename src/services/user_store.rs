//! User store contract
//!
//! The dialog router only needs to look users up and register them on first
//! contact. Registration goes through `get_or_create`, which implementations
//! must make atomic per user id so racing first-contact requests never create
//! two records.

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::user::{CreateUserRequest, User};
use crate::utils::errors::UserStoreResult;

/// Outcome of registering a caller on first contact
#[derive(Debug, Clone, PartialEq)]
pub enum FirstContact {
    /// The user already existed
    Returning(User),
    /// The user was created by this call
    Created(User),
}

impl FirstContact {
    pub fn user(&self) -> &User {
        match self {
            FirstContact::Returning(user) | FirstContact::Created(user) => user,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, FirstContact::Created(_))
    }
}

/// Persistent users keyed by caller identity
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look a user up by id
    async fn get(&self, user_id: &str) -> UserStoreResult<Option<User>>;

    /// Insert a new user
    async fn create(&self, request: CreateUserRequest) -> UserStoreResult<User>;

    /// Return the existing user or create it, atomically
    async fn get_or_create(&self, request: CreateUserRequest) -> UserStoreResult<FirstContact>;

    /// Check the backing store is reachable
    async fn health_check(&self) -> UserStoreResult<()> {
        Ok(())
    }
}

#[async_trait]
impl<T: UserStore + ?Sized> UserStore for Arc<T> {
    async fn get(&self, user_id: &str) -> UserStoreResult<Option<User>> {
        (**self).get(user_id).await
    }

    async fn create(&self, request: CreateUserRequest) -> UserStoreResult<User> {
        (**self).create(request).await
    }

    async fn get_or_create(&self, request: CreateUserRequest) -> UserStoreResult<FirstContact> {
        (**self).get_or_create(request).await
    }

    async fn health_check(&self) -> UserStoreResult<()> {
        (**self).health_check().await
    }
}
