//! GraphQL object types.

use async_graphql::{Object, SimpleObject, ID};

use domain::User;
use user_service_lib::service::CreatedUser;

/// A user record as exposed to clients.
pub struct UserObject(pub User);

#[Object(name = "User")]
impl UserObject {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn age(&self) -> u32 {
        self.0.age
    }

    async fn is_married(&self) -> bool {
        self.0.is_married
    }
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        UserObject(user)
    }
}

/// Payload of `createUser`.
#[derive(Debug, SimpleObject)]
#[graphql(name = "CreatedUser")]
pub struct CreatedUserObject {
    pub name: String,
}

impl From<CreatedUser> for CreatedUserObject {
    fn from(created: CreatedUser) -> Self {
        Self { name: created.name }
    }
}
