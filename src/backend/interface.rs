use crate::core::{User, UserResult};

/// Storage of user records keyed by id.
///
/// Every method is atomic with respect to the others, so the
/// check-then-write operations (`insert`, `replace`, `remove`) can
/// be called from concurrent requests without lost updates.
pub trait UserStore: Send + Sync {
    fn get(&self, id: &str) -> Option<User>;
    /// Inserts or overwrites the record under `user.id`.
    fn put(&self, user: User);
    /// Removes the record if present.
    fn delete(&self, id: &str);
    fn contains(&self, id: &str) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores a new record, failing if its id is taken.
    fn insert(&self, user: User) -> UserResult<User>;
    /// Overwrites an existing record, failing if its id is unknown.
    fn replace(&self, user: User) -> UserResult<User>;
    /// Removes an existing record and returns it.
    fn remove(&self, id: &str) -> UserResult<User>;
}
