//! User service - Handles the three user operations exposed to clients.
//!
//! Arguments arrive loosely typed from the transport. They are checked and
//! converted into domain types here, before anything reaches the repository.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use common::{AppError, AppResult};
use domain::{NewUser, User, UserId};

use crate::repository::UserRepository;

/// Raw `createUser` arguments as received from the transport.
#[derive(Debug, Clone, Default)]
pub struct CreateUserArgs {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub is_married: Option<bool>,
}

impl CreateUserArgs {
    pub fn new(name: impl Into<String>, age: i32, is_married: bool) -> Self {
        Self {
            name: Some(name.into()),
            age: Some(age),
            is_married: Some(is_married),
        }
    }

    /// Require every argument, producing the typed input for the store.
    pub fn into_new_user(self) -> AppResult<NewUser> {
        let name = self.name.ok_or_else(|| missing("name"))?;
        let age = self.age.ok_or_else(|| missing("age"))?;
        let is_married = self.is_married.ok_or_else(|| missing("isMarried"))?;

        Ok(NewUser {
            name,
            age,
            is_married,
        })
    }
}

fn missing(argument: &str) -> AppError {
    AppError::bad_request(format!("missing required argument `{}`", argument))
}

/// Result of `createUser`: only the created user's name is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedUser {
    pub name: String,
}

impl From<User> for CreatedUser {
    fn from(user: User) -> Self {
        Self { name: user.name }
    }
}

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every user in insertion order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get a user by id; `BadRequest` for a missing or malformed id,
    /// `NotFound` when no user has it
    async fn get_user_by_id(&self, id: Option<&str>) -> AppResult<User>;

    /// Create a user from raw arguments
    async fn create_user(&self, args: CreateUserArgs) -> AppResult<CreatedUser>;

    /// Number of users held
    async fn user_count(&self) -> usize;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.repo.list().await)
    }

    async fn get_user_by_id(&self, id: Option<&str>) -> AppResult<User> {
        let raw = id.ok_or_else(|| missing("id"))?;
        let id = UserId::parse(raw).map_err(|e| {
            warn!("Rejected user id {:?}: {}", raw, e);
            AppError::from(e)
        })?;

        let user = self.repo.find_by_id(&id).await?;
        debug!(%id, "Resolved user");
        Ok(user)
    }

    async fn create_user(&self, args: CreateUserArgs) -> AppResult<CreatedUser> {
        let new_user = args.into_new_user().map_err(|e| {
            warn!("Rejected createUser: {}", e);
            e
        })?;

        let user = self.repo.insert(new_user).await?;
        Ok(CreatedUser::from(user))
    }

    async fn user_count(&self) -> usize {
        self.repo.count().await
    }
}
