use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use crate::books::dto::BookDraft;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::{Command, parse_book_id};
use crate::core::controller::{AppState, method_not_allowed, not_found, parse_body, ServerError};

fn build_service(state: AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.books)
}

// Everything below /books/ is an id segment, so `/books/` and `/books/1/2` reach the
// handlers and fail id parsing instead of falling through to 404.
pub fn router(state: AppState) -> Router {
    let book_routes = get(find_book_by_id).put(update_book).delete(remove_book).fallback(method_not_allowed);
    Router::new()
        .route("/books",
               get(list_books).post(add_book).fallback(method_not_allowed))
        .route("/books/", book_routes.clone())
        .route("/books/*book_id", book_routes)
        .fallback(not_found)
        .with_state(state)
}

// `/books/` carries no path params; the catch-all value may or may not keep its leading slash.
fn id_segment(book_id: Option<Path<String>>) -> String {
    match book_id {
        Some(Path(segment)) => segment.strip_prefix('/').unwrap_or(segment.as_str()).to_string(),
        None => String::new(),
    }
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    body: Bytes) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let draft: BookDraft = parse_body(&body)?;
    let req = AddBookCommandRequest::from_draft(draft);
    let svc = build_service(state);
    let res = AddBookCommand::new(svc).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let svc = build_service(state);
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::new()).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    book_id: Option<Path<String>>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(id_segment(book_id));
    let svc = build_service(state);
    let res = GetBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    book_id: Option<Path<String>>,
    body: Bytes) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    // id is checked before the body so a bad path wins over a bad payload
    let id = parse_book_id(id_segment(book_id).as_str())?;
    let draft: BookDraft = parse_body(&body)?;
    let req = UpdateBookCommandRequest::from_draft(id, draft);
    let svc = build_service(state);
    let res = UpdateBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    book_id: Option<Path<String>>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest::new(id_segment(book_id));
    let svc = build_service(state);
    let _ = RemoveBookCommand::new(svc).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}
