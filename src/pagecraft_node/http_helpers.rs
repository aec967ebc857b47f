use actix_web::{http::StatusCode, web, HttpResponse};
use serde_json::json;

use super::http_server::AppState;
use crate::error::{PageCraftError, PageCraftResult};
use crate::pagecraft_node::PageCraftNode;
use crate::schema::SchemaError;
use crate::store::StoreError;

/// Execute a closure against the node and return standardized JSON.
pub async fn with_node<F>(state: web::Data<AppState>, func: F) -> HttpResponse
where
    F: FnOnce(&PageCraftNode) -> PageCraftResult<(StatusCode, serde_json::Value)>,
{
    match func(&state.node) {
        Ok((status, value)) => HttpResponse::build(status).json(value),
        Err(e) => HttpResponse::build(error_status(&e)).json(json!({"error": e.to_string()})),
    }
}

/// Map crate errors onto transport status codes: caller mistakes are 4xx,
/// a failing persistence layer is 5xx.
fn error_status(error: &PageCraftError) -> StatusCode {
    match error {
        PageCraftError::Schema(SchemaError::UnknownType(_)) => StatusCode::NOT_FOUND,
        PageCraftError::Store(StoreError::UnknownDocument(_)) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
