use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::backend::UserStore;
use crate::core::{User, UserId, UserError, UserResult};

type UserMap = HashMap<UserId, User>;

/// Process-lifetime store, all access serialized through one lock.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<UserMap>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore { users: Mutex::new(HashMap::new()) }
    }

    pub fn with_users(users: Vec<User>) -> MemoryStore {
        let users = users.into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();
        MemoryStore { users: Mutex::new(users) }
    }

    // No operation leaves the map half-written, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, UserMap> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserStore for MemoryStore {
    fn get(&self, id: &str) -> Option<User> {
        self.lock().get(id).cloned()
    }

    fn put(&self, user: User) {
        self.lock().insert(user.id.clone(), user);
    }

    fn delete(&self, id: &str) {
        self.lock().remove(id);
    }

    fn contains(&self, id: &str) -> bool {
        self.lock().contains_key(id)
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    fn insert(&self, user: User) -> UserResult<User> {
        match self.lock().entry(user.id.clone()) {
            Entry::Occupied(entry) => Err(UserError::AlreadyExists(entry.key().clone())),
            Entry::Vacant(entry) => Ok(entry.insert(user).clone())
        }
    }

    fn replace(&self, user: User) -> UserResult<User> {
        match self.lock().get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            },
            None => Err(UserError::UnknownUser(user.id))
        }
    }

    fn remove(&self, id: &str) -> UserResult<User> {
        self.lock().remove(id)
            .ok_or_else(|| UserError::UnknownUser(id.to_owned()))
    }
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use crate::backend::{MemoryStore, UserStore};
    use crate::core::{User, UserError};

    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> MemoryStore {
        MemoryStore::with_users(vec![User::new("1", "lucas")])
    }

    #[rstest]
    fn get_and_contains(store: MemoryStore) {
        assert_eq!(store.get("1"), Some(User::new("1", "lucas")));
        assert!(store.contains("1"));
        assert_eq!(store.get("2"), None);
        assert!(!store.contains("2"));
    }

    #[rstest]
    fn put_overwrites(store: MemoryStore) {
        store.put(User::new("1", "lucas simão"));
        store.put(User::new("2", "ana"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("1").unwrap().name, "lucas simão");
    }

    #[rstest]
    fn delete_is_noop_when_absent(store: MemoryStore) {
        store.delete("2");
        assert_eq!(store.len(), 1);

        store.delete("1");
        assert!(store.is_empty());
    }

    #[rstest]
    fn insert_rejects_existing_id(store: MemoryStore) {
        let res = store.insert(User::new("1", "other"));

        assert_eq!(res, Err(UserError::AlreadyExists("1".to_owned())));
        assert_eq!(store.get("1").unwrap().name, "lucas");
    }

    #[rstest]
    fn insert_new_id(store: MemoryStore) {
        let created = store.insert(User::new("2", "ana")).unwrap();

        assert_eq!(created, User::new("2", "ana"));
        assert_eq!(store.get("2"), Some(created));
    }

    #[rstest]
    fn replace_existing(store: MemoryStore) {
        let updated = store.replace(User::new("1", "lucas simão")).unwrap();

        assert_eq!(updated.name, "lucas simão");
        assert_eq!(store.get("1"), Some(updated));
    }

    #[rstest]
    fn replace_unknown_does_not_insert(store: MemoryStore) {
        let res = store.replace(User::new("2", "ana"));

        assert!(matches!(res, Err(UserError::UnknownUser(..))));
        assert!(!store.contains("2"));
        assert_eq!(store.len(), 1);
    }

    #[rstest]
    fn remove_returns_record(store: MemoryStore) {
        assert_eq!(store.remove("1"), Ok(User::new("1", "lucas")));
        assert_eq!(store.remove("1"), Err(UserError::UnknownUser("1".to_owned())));
    }

    #[test]
    fn concurrent_inserts_of_same_id() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.insert(User::new("1", &format!("user {}", i))).is_ok())
            })
            .collect();

        let created = handles.into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(created, 1);
        assert_eq!(store.len(), 1);
    }
}
