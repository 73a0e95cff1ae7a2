use axum::{
    Router,
    extract::{Form, Query, State},
    handler::HandlerWithoutStateExt,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::AppState;
use crate::api::models::{ArticleParams, IndexQuery};
use crate::api::views;
use crate::article::Article;
use crate::error::{AppError, Result};

pub fn create_router(app_state: AppState) -> Router {
    let static_files = ServeDir::new(&app_state.config.public_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    Router::new()
        .route("/", get(index_handler))
        .route("/articles/new", get(new_article_handler))
        .route("/articles", post(create_article_handler))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn index_handler(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>> {
    let articles = state.store.load_or_empty()?;
    tracing::debug!(count = articles.len(), "listing articles");
    Ok(views::index_page(&articles, query.notice()))
}

async fn new_article_handler() -> Html<String> {
    views::new_article_page(None)
}

async fn create_article_handler(
    State(state): State<AppState>,
    Form(params): Form<ArticleParams>,
) -> Result<Response> {
    let mut article = Article::new(params);

    if !article.validate() {
        tracing::info!(
            title = %article.title,
            errors = ?article.errors(),
            "rejected article submission"
        );
        return Ok(views::new_article_page(Some(&article)).into_response());
    }

    let count = state.store.append_and_save(&article)?;
    tracing::info!(title = %article.title, url = %article.url, count, "article saved");

    Ok(Redirect::to("/?saved=1").into_response())
}

async fn not_found() -> AppError {
    AppError::NotFound
}
