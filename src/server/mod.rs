pub mod error;
pub mod operation;
pub mod handlers;
pub mod router;
pub mod server_config;

pub use error::{ErrorResponse, ServiceError, ServiceResult};
pub use handlers::UserService;
pub use operation::UserOperation;
pub use router::router;
pub use server_config::ServerConfig;
