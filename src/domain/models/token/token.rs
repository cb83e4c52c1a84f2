//! JWT 클레임과 토큰 쌍
use serde::{Deserialize, Serialize};

/// 액세스/리프레시 토큰에 공통으로 담기는 클레임
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub role: String,
    /// 토큰 고유 ID (uuid v4)
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// 액세스 토큰 만료까지 남은 초
    pub expires_in: i64,
}
