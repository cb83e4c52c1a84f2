//! 게시물 HTTP 핸들러

use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};

use crate::domain::dto::posts::{PostRequest, PostResponse, PostsResponse};
use crate::domain::dto::JsonResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::pagination::{PaginationParams, PaginationQuery};
use crate::errors::http::HttpError;
use crate::handlers::AppState;

#[get("")]
pub async fn get_all_posts(
    req: HttpRequest,
    params: web::Query<PaginationParams>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, HttpError> {
    let query = PaginationQuery::from_params(&params, req.path());
    let posts = state
        .post_use_case
        .get_all_posts(query)
        .await
        .into_result()
        .map_err(|e| state.fail(e))?;

    Ok(HttpResponse::Ok().json(JsonResponse::success(PostsResponse::from(posts))))
}

#[get("/{post_id}")]
pub async fn get_post_by_id(
    post_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, HttpError> {
    let post = state
        .post_use_case
        .get_post_by_id(&post_id)
        .await
        .into_result()
        .map_err(|e| state.fail(e))?;

    Ok(HttpResponse::Ok().json(JsonResponse::success(PostResponse::from(post))))
}

/// 작성자 이름을 게시물에 함께 저장하기 위해 사용자를 먼저 조회합니다.
#[post("")]
pub async fn create_post(
    current: AuthenticatedUser,
    payload: web::Json<PostRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, HttpError> {
    let author = state
        .user_use_case
        .get_user_by_id(&current.user_id)
        .await
        .into_result()
        .map_err(|e| state.fail(e))?;

    let post = state
        .post_use_case
        .create_post(&author, payload.into_inner())
        .await
        .into_result()
        .map_err(|e| state.fail(e))?;

    Ok(HttpResponse::Created().json(JsonResponse::success(PostResponse::from(post))))
}

#[put("/{post_id}")]
pub async fn update_post(
    current: AuthenticatedUser,
    post_id: web::Path<String>,
    payload: web::Json<PostRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, HttpError> {
    let post = state
        .post_use_case
        .update_post(&current.user_id, &post_id, payload.into_inner())
        .await
        .into_result()
        .map_err(|e| state.fail(e))?;

    Ok(HttpResponse::Ok().json(JsonResponse::success(PostResponse::from(post))))
}

#[delete("/{post_id}")]
pub async fn delete_post(
    current: AuthenticatedUser,
    post_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, HttpError> {
    state
        .post_use_case
        .delete_post_by_id(&current.user_id, &post_id)
        .await
        .into_result()
        .map_err(|e| state.fail(e))?;

    Ok(HttpResponse::NoContent().finish())
}
