//! Post endpoints: list, view, create, edit, delete
//!
//! Each handler performs at most one read and one write through the
//! [`PostStore`](crate::db::PostStore). Mutations answer with a redirect to
//! `/` carrying a flash; validation failures re-render the form with a
//! `danger` flash and write nothing.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};

use crate::http::error::AppError;
use crate::http::extractors::PostId;
use crate::http::server::AppState;
use crate::http::views;
use crate::models::{Flash, FlashParams, Post, PostDraft, PostForm};

const CREATED: &str = "Post created successfully!";
const UPDATED: &str = "Post updated successfully!";

/// Redirect to the post list, carrying `flash` to it.
fn to_index(flash: Flash) -> Response {
    Redirect::to(&flash.redirect_to("/")).into_response()
}

async fn load_post(state: &AppState, id: i64) -> Result<Post, AppError> {
    state
        .store
        .get_post(id)
        .await?
        .ok_or_else(|| AppError::not_found(id))
}

/// GET / - list all posts, newest first
async fn index(
    State(state): State<Arc<AppState>>,
    params: Result<Query<FlashParams>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let flash = params.ok().and_then(|Query(p)| p.into_flash());
    let posts = state.store.list_posts().await?;
    Ok(views::list_page(&posts, flash.as_ref()))
}

/// GET /{id} - show one post
async fn show(
    State(state): State<Arc<AppState>>,
    PostId(id): PostId,
) -> Result<Html<String>, AppError> {
    let post = load_post(&state, id).await?;
    Ok(views::post_page(&post))
}

/// GET /create - empty creation form
async fn create_form() -> Html<String> {
    views::create_page(None)
}

/// POST /create - validate and insert a new post
async fn create(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    let draft = match PostDraft::from_form(&form) {
        Ok(draft) => draft,
        Err(e) => {
            tracing::debug!(field = e.field(), "rejected new post");
            return Ok(views::create_page(Some(&Flash::danger(e.to_string()))).into_response());
        }
    };

    let id = state.store.insert_post(&draft).await?;
    tracing::info!(post_id = id, "post created");
    Ok(to_index(Flash::success(CREATED)))
}

/// GET /{id}/edit - form pre-filled with the stored post
async fn edit_form(
    State(state): State<Arc<AppState>>,
    PostId(id): PostId,
) -> Result<Html<String>, AppError> {
    let post = load_post(&state, id).await?;
    Ok(views::edit_page(&post, None))
}

/// POST /{id}/edit - validate and overwrite title and content
async fn edit(
    State(state): State<Arc<AppState>>,
    PostId(id): PostId,
    form: Result<Form<PostForm>, FormRejection>,
) -> Result<Response, AppError> {
    // A missing post is a 404 whatever the body looks like
    let post = load_post(&state, id).await?;
    let Form(form) = form?;

    let draft = match PostDraft::from_form(&form) {
        Ok(draft) => draft,
        Err(e) => {
            tracing::debug!(post_id = id, field = e.field(), "rejected post edit");
            // The form is re-rendered from the stored post, not the submission.
            let flash = Flash::danger(e.to_string());
            return Ok(views::edit_page(&post, Some(&flash)).into_response());
        }
    };

    state.store.update_post(id, &draft).await?;
    tracing::info!(post_id = id, "post updated");
    Ok(to_index(Flash::success(UPDATED)))
}

/// POST /{id}/delete - remove a post
async fn delete(
    State(state): State<Arc<AppState>>,
    PostId(id): PostId,
) -> Result<Response, AppError> {
    let post = load_post(&state, id).await?;
    state.store.delete_post(id).await?;
    tracing::info!(post_id = id, "post deleted");
    Ok(to_index(Flash::success(format!(
        "\"{}\" was successfully deleted!",
        post.title
    ))))
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/create", get(create_form).post(create))
        .route("/{id}", get(show))
        .route("/{id}/edit", get(edit_form).post(edit))
        .route("/{id}/delete", post(delete))
}
