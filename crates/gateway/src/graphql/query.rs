//! Read operations.

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use super::{user_service, UserObject};

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All users in insertion order
    async fn get_users(&self, ctx: &Context<'_>) -> Result<Vec<UserObject>> {
        let users = user_service(ctx)?
            .list_users()
            .await
            .map_err(|e| e.extend())?;

        Ok(users.into_iter().map(UserObject::from).collect())
    }

    /// A single user; fails with code `NOT_FOUND` when no user has the id
    async fn get_user_by_id(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<UserObject>> {
        let user = user_service(ctx)?
            .get_user_by_id(id.as_deref().map(String::as_str))
            .await
            .map_err(|e| e.extend())?;

        Ok(Some(UserObject::from(user)))
    }
}
