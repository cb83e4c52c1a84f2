//! 사용자 관리 유스케이스
//!
//! 가입, 로그인 검증, 이름 변경, 탈퇴와 조회를 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 비용)
//! - 이메일 중복 방지
//! - 로그인 실패 사유를 구분하지 않는 응답

pub mod user_service;
