//! 사용자 데이터 액세스 계층
//!
//! [`MongoUserRepository`](user_repo::MongoUserRepository)가 `users` 컬렉션에 대한
//! [`UserRepository`](crate::repositories::UserRepository) 계약을 구현합니다.

pub mod user_repo;

pub use user_repo::MongoUserRepository;
