//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계에서 주고받는 요청/응답 형태를 정의합니다.
//! 요청 DTO는 `validator` 규칙과 [`OrderedValidation`](crate::domain::validation::OrderedValidation)
//! 순서를 함께 가지며, 응답 DTO는 도메인 모델에서 `From`으로 변환됩니다.
//!
//! ```text
//! dto/
//! ├── json_response.rs    # {"status", "data"?, "error"?, "errors"?} 봉투
//! ├── users/
//! │   ├── request/        # CreateUserRequest, UpdateUserRequest, LoginRequest, RefreshTokenRequest
//! │   └── response/       # UserResponse, UsersResponse, LoginResponse
//! └── posts/
//!     ├── request.rs      # PostRequest (생성/수정)
//!     └── response.rs     # PostResponse, PostsResponse
//! ```

pub mod json_response;
pub mod posts;
pub mod users;

pub use json_response::JsonResponse;
