//! MongoDB 저장 문서
//!
//! `_id`(ObjectId)와 BSON 날짜를 가진 영속성 표현입니다.
//! 리포지토리 밖으로는 `From` 변환을 거친 도메인 모델만 나갑니다.

pub mod posts;
pub mod users;

use chrono::{TimeZone, Utc};
use mongodb::bson;

pub use posts::PostDocument;
pub use users::UserDocument;

/// BSON 날짜를 chrono UTC 시각으로 변환합니다.
pub(crate) fn to_chrono(value: bson::DateTime) -> chrono::DateTime<Utc> {
    Utc.timestamp_millis_opt(value.timestamp_millis())
        .single()
        .unwrap_or_default()
}
