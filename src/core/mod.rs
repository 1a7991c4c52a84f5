pub mod user;
pub mod error;

pub use user::{User, UserId};
pub use error::{UserError, UserResult};
