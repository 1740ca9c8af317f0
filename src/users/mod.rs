pub mod dto;
pub mod errors;
pub mod repo;
pub mod repo_types;
pub mod services;

pub use errors::{DatasetError, QueryError};
pub use repo_types::User;
pub use services::UserQueryService;
