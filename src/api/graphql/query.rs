use std::sync::Arc;

use async_graphql::{Context, ID, Object, Result};
use tracing::debug;

use super::{UserObject, parse_user_id};
use crate::storage::UserStore;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All users in insertion order
    async fn users(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<UserObject>>>> {
        let store = ctx.data::<Arc<UserStore>>()?;
        let users = store.list();
        debug!("Query users -> {} results", users.len());
        Ok(Some(
            users.into_iter().map(|u| Some(UserObject::from(u))).collect(),
        ))
    }

    /// Look up a single user; `null` when no user has this id
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<UserObject>> {
        let store = ctx.data::<Arc<UserStore>>()?;
        let user = parse_user_id(&id).and_then(|id| store.get(id));
        debug!("Query user({}) -> found={}", id.as_str(), user.is_some());
        Ok(user.map(UserObject::from))
    }
}
