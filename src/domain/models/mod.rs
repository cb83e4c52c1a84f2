//! # Domain Models Module
//!
//! 저장소 표현(`entities`)이나 전송 표현(`dto`)과 분리된 도메인 값들입니다.
//! 리포지토리와 유스케이스는 이 타입들만 주고받습니다.
//!
//! ```text
//! models/
//! ├── users.rs        ← User, Users, NewUser, UserChanges
//! ├── posts.rs        ← Post, Posts, NewPost, PostChanges
//! ├── pagination.rs   ← PaginationQuery, PaginationResponse
//! ├── auth/           ← AuthenticatedUser (요청 extensions)
//! └── token/          ← TokenClaims, TokenPair
//! ```

pub mod auth;
pub mod pagination;
pub mod posts;
pub mod token;
pub mod users;

pub use pagination::{PaginationParams, PaginationQuery, PaginationResponse, SortOrder};
pub use posts::{NewPost, Post, PostChanges, Posts};
pub use users::{NewUser, User, UserChanges, Users};
