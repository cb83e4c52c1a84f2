//! 사용자 HTTP 핸들러
//!
//! `/me` 핸들러는 [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 넣어 둔
//! [`AuthenticatedUser`]를 추출자로 받습니다.

use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};

use crate::domain::dto::users::{
    CreateUserRequest, LoginRequest, LoginResponse, RefreshTokenRequest, UpdateUserRequest,
    UserResponse, UsersResponse,
};
use crate::domain::dto::JsonResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::pagination::{PaginationParams, PaginationQuery};
use crate::domain::validation::OrderedValidation;
use crate::errors::http::HttpError;
use crate::handlers::AppState;

const LOCATION: &str = "handlers.users.";

#[get("")]
pub async fn get_all_users(
    req: HttpRequest,
    params: web::Query<PaginationParams>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, HttpError> {
    let query = PaginationQuery::from_params(&params, req.path());
    let users = state
        .user_use_case
        .get_all_users(query)
        .await
        .into_result()
        .map_err(|e| state.fail(e))?;

    Ok(HttpResponse::Ok().json(JsonResponse::success(UsersResponse::from(users))))
}

#[get("/{user_id}")]
pub async fn get_user_by_id(
    user_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, HttpError> {
    let user = state
        .user_use_case
        .get_user_by_id(&user_id)
        .await
        .into_result()
        .map_err(|e| state.fail(e))?;

    Ok(HttpResponse::Ok().json(JsonResponse::success(UserResponse::from(user))))
}

#[get("/email/{email}")]
pub async fn get_user_by_email(
    email: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, HttpError> {
    let user = state
        .user_use_case
        .get_user_by_email(&email)
        .await
        .into_result()
        .map_err(|e| state.fail(e))?;

    Ok(HttpResponse::Ok().json(JsonResponse::success(UserResponse::from(user))))
}

#[post("")]
pub async fn register(
    payload: web::Json<CreateUserRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, HttpError> {
    let user = state
        .user_use_case
        .register(payload.into_inner())
        .await
        .into_result()
        .map_err(|e| state.fail(e))?;

    log::info!("✅ 사용자 가입 완료: {}", user.user_id);
    Ok(HttpResponse::Created().json(JsonResponse::success(UserResponse::from(user))))
}

#[post("")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, HttpError> {
    let user = state
        .user_use_case
        .login(payload.into_inner())
        .await
        .into_result()
        .map_err(|e| state.fail(e))?;

    let tokens = state
        .token_service
        .generate_token_pair(&user)
        .map_err(|e| state.fail(e))?;

    Ok(HttpResponse::Ok().json(JsonResponse::success(LoginResponse::new(user, tokens))))
}

/// 리프레시 토큰으로 새 토큰 쌍을 발급합니다.
#[post("/refresh")]
pub async fn refresh(
    payload: web::Json<RefreshTokenRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, HttpError> {
    payload
        .check(&format!("{}refresh", LOCATION))
        .map_err(|e| state.fail(e))?;

    let claims = state
        .token_service
        .verify_refresh_token(payload.refresh_token.trim())
        .map_err(|e| state.fail(e))?;

    let user = state
        .user_use_case
        .get_user_by_id(&claims.sub)
        .await
        .into_result()
        .map_err(|e| state.fail(e))?;

    let tokens = state
        .token_service
        .generate_token_pair(&user)
        .map_err(|e| state.fail(e))?;

    Ok(HttpResponse::Ok().json(JsonResponse::success(LoginResponse::new(user, tokens))))
}

#[get("")]
pub async fn get_me(
    current: AuthenticatedUser,
    state: web::Data<AppState>,
) -> Result<HttpResponse, HttpError> {
    let user = state
        .user_use_case
        .get_user_by_id(&current.user_id)
        .await
        .into_result()
        .map_err(|e| state.fail(e))?;

    Ok(HttpResponse::Ok().json(JsonResponse::success(UserResponse::from(user))))
}

#[put("")]
pub async fn update_me(
    current: AuthenticatedUser,
    payload: web::Json<UpdateUserRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, HttpError> {
    let user = state
        .user_use_case
        .update_current_user(&current.user_id, payload.into_inner())
        .await
        .into_result()
        .map_err(|e| state.fail(e))?;

    Ok(HttpResponse::Ok().json(JsonResponse::success(UserResponse::from(user))))
}

#[delete("")]
pub async fn delete_me(
    current: AuthenticatedUser,
    state: web::Data<AppState>,
) -> Result<HttpResponse, HttpError> {
    state
        .user_use_case
        .delete_user_by_id(&current.user_id)
        .await
        .into_result()
        .map_err(|e| state.fail(e))?;

    log::info!("🗑️ 사용자 탈퇴: {}", current.user_id);
    Ok(HttpResponse::NoContent().finish())
}
