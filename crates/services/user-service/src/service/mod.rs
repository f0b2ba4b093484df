//! Service layer - request handling over the repository.

mod user_service;

pub use user_service::{CreateUserArgs, CreatedUser, UserManager, UserService};
