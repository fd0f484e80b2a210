//! Post CRUD handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use quill_core::domain::PostDraft;
use quill_shared::dto::PostPayload;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn draft_from(payload: PostPayload) -> PostDraft {
    PostDraft {
        title: payload.title,
        content: payload.content,
        category: payload.category,
        tags: payload.tags,
    }
}

/// The `{id}` segment is parsed by hand so a non-numeric id is a 400,
/// never a routing 404.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("id must be a number".to_string()))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let draft = draft_from(body.into_inner());
    draft.validate()?;

    let post = state.posts.create(draft).await?;
    Ok(HttpResponse::Created().json(post))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    term: Option<String>,
}

/// GET /posts
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    // An empty term means "no filter", same as no term at all.
    let term = query.term.as_deref().filter(|t| !t.is_empty());

    let posts = state.posts.find_all(term).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    match state.posts.find_by_id(id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::NotFound(format!("post {id} not found"))),
    }
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let draft = draft_from(body.into_inner());
    draft.validate()?;

    let post = state.posts.update(id, draft).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    state.posts.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
