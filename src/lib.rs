pub mod core;
pub mod backend;
pub mod server;

pub use crate::core::{User, UserId, UserError};
pub use crate::backend::{UserStore, MemoryStore};
