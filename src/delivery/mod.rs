//! 전송 계층 구현
//!
//! - [`actix_delivery`] - actix-web HTTP 서버 (`Actix` 전략)

pub mod actix_delivery;

pub use actix_delivery::ActixDelivery;
