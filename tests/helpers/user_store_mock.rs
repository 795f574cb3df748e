//! In-memory user store
//!
//! Counts every call so tests can assert how the router used the store, and can
//! be switched into a failing mode to exercise error propagation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Barrier;

use AliceSkill::models::{CreateUserRequest, User};
use AliceSkill::services::{FirstContact, UserStore};
use AliceSkill::utils::errors::{UserStoreError, UserStoreResult};

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<String, User>>,
    created: AtomicUsize,
    lookups: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with known users
    pub fn with_users(user_ids: &[&str]) -> Self {
        let store = Self::new();
        {
            let mut users = store.users.lock().unwrap();
            for id in user_ids {
                users.insert(id.to_string(), make_user(id, "", "YANDEX"));
            }
        }
        store
    }

    /// Store pre-populated with one user assigned to `group`
    pub fn with_grouped_user(user_id: &str, group: &str) -> Self {
        let store = Self::new();
        store
            .users
            .lock()
            .unwrap()
            .insert(user_id.to_string(), make_user(user_id, group, "YANDEX"));
        store
    }

    /// Number of users created through this store
    pub fn created_count(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// Number of lookups and get-or-create calls
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn user(&self, user_id: &str) -> Option<User> {
        self.users.lock().unwrap().get(user_id).cloned()
    }

    /// Make every subsequent call fail
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> UserStoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(UserStoreError::Unavailable("in-memory store switched off".to_string()));
        }
        Ok(())
    }
}

fn make_user(user_id: &str, group: &str, platform: &str) -> User {
    User {
        user_id: user_id.to_string(),
        group: group.to_string(),
        platform: platform.to_string(),
        created_at: Utc::now(),
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get(&self, user_id: &str) -> UserStoreResult<Option<User>> {
        self.check_available()?;
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.user(user_id))
    }

    async fn create(&self, request: CreateUserRequest) -> UserStoreResult<User> {
        self.check_available()?;
        let user = make_user(&request.user_id, &request.group, request.platform.as_str());
        self.users.lock().unwrap().insert(request.user_id, user.clone());
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(user)
    }

    async fn get_or_create(&self, request: CreateUserRequest) -> UserStoreResult<FirstContact> {
        self.check_available()?;
        self.lookups.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        let mut users = self.users.lock().unwrap();
        if let Some(existing) = users.get(&request.user_id) {
            return Ok(FirstContact::Returning(existing.clone()));
        }

        let user = make_user(&request.user_id, &request.group, request.platform.as_str());
        users.insert(request.user_id, user.clone());
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(FirstContact::Created(user))
    }

    async fn health_check(&self) -> UserStoreResult<()> {
        self.check_available()
    }
}

/// Lookup-then-create store without atomicity.
///
/// Every `get_or_create` caller waits on a shared barrier between its lookup and
/// its insert, so `parties` concurrent first contacts all see "absent".
#[derive(Debug)]
pub struct NonAtomicUserStore {
    pub inner: Arc<InMemoryUserStore>,
    barrier: Barrier,
}

impl NonAtomicUserStore {
    pub fn new(parties: usize) -> Self {
        Self {
            inner: Arc::new(InMemoryUserStore::new()),
            barrier: Barrier::new(parties),
        }
    }
}

#[async_trait]
impl UserStore for NonAtomicUserStore {
    async fn get(&self, user_id: &str) -> UserStoreResult<Option<User>> {
        self.inner.get(user_id).await
    }

    async fn create(&self, request: CreateUserRequest) -> UserStoreResult<User> {
        self.inner.create(request).await
    }

    async fn get_or_create(&self, request: CreateUserRequest) -> UserStoreResult<FirstContact> {
        let existing = self.inner.get(&request.user_id).await?;
        self.barrier.wait().await;

        match existing {
            Some(user) => Ok(FirstContact::Returning(user)),
            None => Ok(FirstContact::Created(self.inner.create(request).await?)),
        }
    }
}
