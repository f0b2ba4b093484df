//! In-memory user repository.
//!
//! Records live in insertion order behind a single reader/writer lock.
//! Reads share the lock; `insert` holds it exclusively so that taking the
//! next id and appending the record happen as one step.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use domain::{DomainError, DomainResult, NewUser, User, UserId, FIRST_USER_ID, SEED_USERS};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users in insertion order
    async fn list(&self) -> Vec<User>;

    /// Find user by ID, failing with `NotFound` on a miss
    async fn find_by_id(&self, id: &UserId) -> DomainResult<User>;

    /// Validate and store a new user, assigning a fresh id
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    /// Number of stored users
    async fn count(&self) -> usize;
}

#[derive(Debug)]
struct StoreState {
    users: Vec<User>,
    next_id: u64,
}

impl StoreState {
    fn empty() -> Self {
        Self {
            users: Vec::new(),
            next_id: FIRST_USER_ID,
        }
    }

    fn append(&mut self, new_user: NewUser) -> DomainResult<User> {
        let id = UserId::from_sequence(self.next_id);
        let user = new_user.into_user(id)?;

        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| DomainError::internal("user id sequence exhausted"))?;
        self.users.push(user.clone());

        Ok(user)
    }
}

/// Concrete in-memory implementation of UserRepository.
///
/// Ids come from a counter that only moves forward, so they stay unique
/// regardless of how many records are held.
#[derive(Debug)]
pub struct InMemoryUserStore {
    state: RwLock<StoreState>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::empty()),
        }
    }

    /// Create a store holding the built-in seed records (ids "1" to "4")
    pub fn seeded() -> Self {
        let mut state = StoreState::empty();
        for seed in SEED_USERS {
            // Seed records are constants that always pass validation.
            if let Err(e) = state.append(NewUser::new(seed.name, seed.age, seed.is_married)) {
                tracing::error!("Skipping seed record {}: {}", seed.name, e);
            }
        }

        Self {
            state: RwLock::new(state),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn list(&self) -> Vec<User> {
        self.state.read().await.users.clone()
    }

    async fn find_by_id(&self, id: &UserId) -> DomainResult<User> {
        let state = self.state.read().await;
        let found = state.users.iter().find(|user| &user.id == id).cloned();
        debug!(%id, found = found.is_some(), "User lookup");

        found.ok_or_else(|| DomainError::not_found(format!("user {}", id)))
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        // Reject bad input before taking the write lock
        new_user.check()?;

        let mut state = self.state.write().await;
        let user = state.append(new_user)?;
        info!(id = %user.id, name = %user.name, "User created");

        Ok(user)
    }

    async fn count(&self) -> usize {
        self.state.read().await.users.len()
    }
}
