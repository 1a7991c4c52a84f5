use std::fmt;

use serde::{Serialize, Deserialize, Deserializer};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};

use crate::core::error::{UserError, UserResult};

pub type UserId = String;

/// A user record, keyed in the store by its `id`.
#[derive(Clone, Eq, PartialEq, Hash, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: &str, name: &str) -> User {
        User { id: id.to_owned(), name: name.to_owned() }
    }

    /// Checks that both fields are present.
    pub fn validate(&self) -> UserResult<()> {
        if self.id.is_empty() || self.name.is_empty() {
            return Err(UserError::MissingField);
        }
        return Ok(());
    }

    /// Decodes the first JSON value in `body`, ignoring whatever follows it.
    pub fn from_json(body: &[u8]) -> serde_json::Result<User> {
        match serde_json::Deserializer::from_slice(body).into_iter::<User>().next() {
            Some(user) => user,
            None => Err(<serde_json::Error as de::Error>::custom("EOF"))
        }
    }
}

/// Keys match `id` and `name` regardless of ASCII case. Missing, null and
/// unknown fields are skipped, so an empty object decodes to empty fields
/// and reaches validation.
impl<'de> Deserialize<'de> for User {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(UserVisitor)
    }
}

struct UserVisitor;

impl<'de> Visitor<'de> for UserVisitor {
    type Value = User;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a user object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<User, A::Error> {
        let mut user = User::new("", "");
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("id") {
                if let Some(id) = map.next_value::<Option<String>>()? {
                    user.id = id;
                }
            } else if key.eq_ignore_ascii_case("name") {
                if let Some(name) = map.next_value::<Option<String>>()? {
                    user.name = name;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        return Ok(user);
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User {}: {}", self.id, self.name)
    }
}
