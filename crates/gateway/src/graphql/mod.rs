//! GraphQL API for the user directory.
//!
//! - [`QueryRoot`]: `getUsers`, `getUserById`
//! - [`MutationRoot`]: `createUser`
//!
//! Resolver failures carry an `extensions.code` (`NOT_FOUND`,
//! `VALIDATION_ERROR`, `BAD_REQUEST`, `INTERNAL_ERROR`). Errors raised by the
//! GraphQL engine itself (parse errors, unknown fields, argument type
//! mismatches) are tagged `BAD_REQUEST` so every failure has a code.

mod mutation;
mod query;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{CreatedUserObject, UserObject};

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Response, Schema};
use user_service_lib::service::UserService;

/// Schema without subscriptions
pub type UserSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over a user service.
pub fn build_schema(users: Arc<dyn UserService>) -> UserSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(users)
        .finish()
}

/// Give every error without a code the `BAD_REQUEST` code.
pub fn tag_request_errors(mut response: Response) -> Response {
    for error in &mut response.errors {
        let extensions = error.extensions.get_or_insert_with(Default::default);
        if extensions.get("code").is_none() {
            extensions.set("code", "BAD_REQUEST");
        }
    }
    response
}

fn user_service<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<dyn UserService>> {
    ctx.data::<Arc<dyn UserService>>()
}
