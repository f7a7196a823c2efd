use std::sync::Arc;

use async_graphql::{Context, ID, MaybeUndefined, Object, Result};
use tracing::debug;

use super::{UserObject, parse_user_id};
use crate::errors::UserqlError;
use crate::storage::{UserPatch, UserStore};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Append a user. A missing age is stored as 0.
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: Option<i32>,
    ) -> Result<Option<UserObject>> {
        let store = ctx.data::<Arc<UserStore>>()?;
        let user = store.create(name, age);
        Ok(Some(user.into()))
    }

    /// Overwrite the supplied fields of an existing user. An explicit
    /// `age: null` clears the age; leaving `age` out keeps it.
    ///
    /// Fails with "User not found" for an unknown id.
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        age: MaybeUndefined<i32>,
    ) -> Result<Option<UserObject>> {
        let store = ctx.data::<Arc<UserStore>>()?;
        let age = match age {
            MaybeUndefined::Undefined => None,
            MaybeUndefined::Null => Some(None),
            MaybeUndefined::Value(age) => Some(Some(age)),
        };
        let patch = UserPatch { name, age };

        match parse_user_id(&id).and_then(|id| store.update(id, patch)) {
            Some(user) => Ok(Some(user.into())),
            None => {
                debug!("updateUser({}) rejected: no such user", id.as_str());
                Err(UserqlError::user_not_found().into_graphql_error())
            }
        }
    }

    /// Remove a user. Returns false for an unknown id rather than failing.
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<bool>> {
        let store = ctx.data::<Arc<UserStore>>()?;
        let deleted = parse_user_id(&id).is_some_and(|id| store.delete(id));
        Ok(Some(deleted))
    }
}
