use async_graphql::{ID, Object};

use crate::storage::User;

/// GraphQL view of a stored [`User`]
pub struct UserObject(pub User);

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self(user)
    }
}

#[Object(name = "User")]
impl UserObject {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn age(&self) -> Option<i32> {
        self.0.age
    }
}
