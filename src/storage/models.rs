use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    /// Only `updateUser` with an explicit `age: null` clears this
    #[serde(default)]
    pub age: Option<i32>,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            name: name.into(),
            age: Some(age),
        }
    }
}

/// Fields to overwrite on an existing user.
///
/// `age` has three states: `None` keeps the current value, `Some(None)`
/// clears it, `Some(Some(n))` sets it.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub age: Option<Option<i32>>,
}
