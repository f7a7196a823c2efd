//! In-memory user store
//!
//! Holds the ordered user list for the lifetime of the process. Every
//! operation takes the lock exactly once, so a single GraphQL field always
//! sees and leaves the list in a consistent state.

use parking_lot::RwLock;
use tracing::{debug, info};

use super::models::{User, UserPatch};

pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::from_users(Vec::new())
    }

    /// Create a store seeded with the two demo users (Alice and Bob)
    pub fn with_demo_users() -> Self {
        Self::from_users(vec![User::new(1, "Alice", 25), User::new(2, "Bob", 30)])
    }

    pub fn from_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Snapshot of all users in insertion order
    pub fn list(&self) -> Vec<User> {
        self.users.read().clone()
    }

    /// First user with the given id, if any
    pub fn get(&self, id: u64) -> Option<User> {
        self.users.read().iter().find(|u| u.id == id).cloned()
    }

    /// Append a new user and return it.
    ///
    /// The id is one past the current maximum, or 1 for an empty store. Ids
    /// freed by deleting the highest user are handed out again.
    pub fn create(&self, name: String, age: Option<i32>) -> User {
        let mut users = self.users.write();
        let id = users.iter().map(|u| u.id).max().map_or(1, |max| max + 1);
        let user = User {
            id,
            name,
            age: Some(age.unwrap_or(0)),
        };
        users.push(user.clone());

        info!("Created user {} ({})", user.id, user.name);
        user
    }

    /// Apply `patch` to the user with `id` and return the updated record.
    ///
    /// An empty name in the patch keeps the existing name; an explicit
    /// `Some(None)` age clears the age. Returns `None` when no user has that id.
    pub fn update(&self, id: u64, patch: UserPatch) -> Option<User> {
        let mut users = self.users.write();
        let user = users.iter_mut().find(|u| u.id == id)?;

        if let Some(name) = patch.name.filter(|n| !n.is_empty()) {
            user.name = name;
        }
        if let Some(age) = patch.age {
            user.age = age;
        }

        debug!("Updated user {}: name={}, age={:?}", user.id, user.name, user.age);
        Some(user.clone())
    }

    /// Remove the user with `id`. Returns `false` if it did not exist.
    pub fn delete(&self, id: u64) -> bool {
        let mut users = self.users.write();
        match users.iter().position(|u| u.id == id) {
            Some(index) => {
                users.remove(index);
                info!("Deleted user {}", id);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}
