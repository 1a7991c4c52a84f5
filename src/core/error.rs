use thiserror::Error;

use crate::core::UserId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    /// Occurs when a user is submitted for creation
    /// without an id or without a name.
    #[error("the body is empty")]
    MissingField,
    /// Occurs when creating a user whose id is already
    /// registered in the store.
    #[error("the id:{0} exist")]
    AlreadyExists(UserId),
    /// Occurs when attempting to read, update or delete
    /// a user by an id which is not in the store.
    #[error("user with id: {0} don't exist")]
    UnknownUser(UserId)
}

pub type UserResult<T> = Result<T, UserError>;
