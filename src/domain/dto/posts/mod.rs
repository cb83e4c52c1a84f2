pub mod request;
pub mod response;

pub use request::{CreatePostRequest, PostRequest, UpdatePostRequest};
pub use response::{PostResponse, PostsResponse};
