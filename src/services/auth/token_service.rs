//! # JWT 토큰 서비스
//!
//! HS256 서명의 액세스 토큰과 리프레시 토큰을 발급하고 검증합니다.
//! 두 토큰은 서로 다른 시크릿으로 서명되므로 리프레시 토큰을 액세스 토큰으로
//! 쓰거나 그 반대로 쓰면 서명 검증에서 실패합니다.
//!
//! ## 에러 매핑
//!
//! | jsonwebtoken | 도메인 에러 |
//! |--------------|-------------|
//! | `ExpiredSignature` | [`TimeExpiredError`] |
//! | 그 외 (형식 오류, 서명 불일치 등) | [`InvalidTokenError`] |
//! | 인코딩 실패 | [`InternalError`] |
//!
//! ```rust,ignore
//! let service = TokenService::new(config.access_token.clone(), config.refresh_token.clone());
//! let pair = service.generate_token_pair(&user)?;
//! let claims = service.verify_access_token(&pair.access_token)?;
//! assert_eq!(claims.sub, user.user_id);
//! ```

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::application_config::TokenConfig;
use crate::domain::models::token::{TokenClaims, TokenPair};
use crate::domain::models::users::User;
use crate::errors::domain::{
    notification, DomainError, InternalError, InvalidTokenError, TimeExpiredError,
};

const LOCATION: &str = "services.auth.token_service.";
const BEARER_PREFIX: &str = "Bearer ";
pub const TOKEN_TYPE: &str = "Bearer";

#[derive(Debug, Clone)]
pub struct TokenService {
    access: TokenConfig,
    refresh: TokenConfig,
}

impl TokenService {
    pub fn new(access: TokenConfig, refresh: TokenConfig) -> Self {
        Self { access, refresh }
    }

    pub fn generate_access_token(&self, user: &User) -> Result<String, DomainError> {
        sign(&self.access, user, "generate_access_token")
    }

    pub fn generate_refresh_token(&self, user: &User) -> Result<String, DomainError> {
        sign(&self.refresh, user, "generate_refresh_token")
    }

    /// 액세스/리프레시 토큰 쌍을 발급합니다.
    pub fn generate_token_pair(&self, user: &User) -> Result<TokenPair, DomainError> {
        let access_token = self.generate_access_token(user)?;
        let refresh_token = self.generate_refresh_token(user)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: self.access.expired_in.as_secs() as i64,
        })
    }

    pub fn verify_access_token(&self, token: &str) -> Result<TokenClaims, DomainError> {
        verify(&self.access, token, "verify_access_token")
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, DomainError> {
        verify(&self.refresh, token, "verify_refresh_token")
    }

    /// `Authorization` 헤더 값에서 토큰 부분만 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, header: &'a str) -> Result<&'a str, DomainError> {
        header
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                InvalidTokenError::new(
                    format!("{}extract_bearer_token", LOCATION),
                    notification::INVALID_TOKEN_ERROR_NOTIFICATION,
                )
                .into()
            })
    }
}

fn sign(config: &TokenConfig, user: &User, function: &str) -> Result<String, DomainError> {
    let location = format!("{}{}", LOCATION, function);
    if user.user_id.is_empty() {
        return Err(InternalError::new(location, "user id is empty").into());
    }

    let now = Utc::now();
    let lifetime = Duration::from_std(config.expired_in)
        .map_err(|e| DomainError::internal(location.as_str(), e))?;
    let expires_at = now
        .checked_add_signed(lifetime)
        .ok_or_else(|| DomainError::from(InternalError::new(location.as_str(), "token lifetime is out of range")))?;

    let claims = TokenClaims {
        sub: user.user_id.clone(),
        role: user.role.clone(),
        jti: Uuid::new_v4().to_string(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| DomainError::internal(location.as_str(), e))
}

fn verify(config: &TokenConfig, token: &str, function: &str) -> Result<TokenClaims, DomainError> {
    let location = format!("{}{}", LOCATION, function);
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => {
            TimeExpiredError::new(location, notification::TIME_EXPIRED_ERROR_NOTIFICATION).into()
        }
        _ => InvalidTokenError::new(location, notification::INVALID_TOKEN_ERROR_NOTIFICATION).into(),
    })
}
