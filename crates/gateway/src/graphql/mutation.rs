//! Write operations.

use async_graphql::{Context, ErrorExtensions, Object, Result};
use user_service_lib::service::CreateUserArgs;

use super::{user_service, CreatedUserObject};

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a user and return its name
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        age: Option<i32>,
        is_married: Option<bool>,
    ) -> Result<CreatedUserObject> {
        let args = CreateUserArgs {
            name,
            age,
            is_married,
        };

        let created = user_service(ctx)?
            .create_user(args)
            .await
            .map_err(|e| e.extend())?;

        Ok(CreatedUserObject::from(created))
    }
}
