//! GraphQL API over the user store
//!
//! - [`QueryRoot`]: `users`, `user(id)`
//! - [`MutationRoot`]: `createUser`, `updateUser`, `deleteUser`

mod mutation;
mod query;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::UserObject;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

use crate::storage::UserStore;

pub type UserSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with `store` attached as context data
pub fn build_schema(store: Arc<UserStore>) -> UserSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Parse a GraphQL `ID` into a store id the way JavaScript's `parseInt`
/// reads it: leading whitespace and a `+` sign are skipped, a `0x` prefix
/// switches to hex, and only the leading digit run counts, so `"2.0"` and
/// `"2abc"` both mean 2. Negative or digit-less ids match no user.
pub(crate) fn parse_user_id(id: &async_graphql::ID) -> Option<u64> {
    let s = id.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);

    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());

    u64::from_str_radix(&digits[..end], radix).ok()
}
