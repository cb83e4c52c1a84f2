pub mod auth_request;
pub mod create_user_request;

pub use auth_request::{LoginRequest, RefreshTokenRequest};
pub use create_user_request::{CreateUserRequest, UpdateUserRequest};
