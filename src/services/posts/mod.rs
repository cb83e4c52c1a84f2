//! 게시물 유스케이스

pub mod post_service;
