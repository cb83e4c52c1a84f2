//! # Domain Layer Module
//!
//! 사용자/게시물 도메인의 값, 저장 문서, 전송 형태를 정의합니다.
//!
//! ```text
//! domain/
//! ├── models/       ← 도메인 값 (User, Post, 페이지네이션, 토큰)
//! ├── entities/     ← MongoDB 문서 (UserDocument, PostDocument)
//! ├── dto/          ← HTTP 요청/응답 형태와 JSON 봉투
//! └── validation.rs ← validator 결과를 순서가 보존된 ValidationErrors로 변환
//! ```

pub mod dto;
pub mod entities;
pub mod models;
pub mod validation;
