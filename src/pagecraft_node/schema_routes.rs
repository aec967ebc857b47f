use super::http_helpers::with_node;
use super::http_server::AppState;
use actix_web::{http::StatusCode, web, Responder};
use log::info;
use serde_json::json;

/// List all block types.
pub async fn list_block_types(state: web::Data<AppState>) -> impl Responder {
    info!("Received request to list block types");
    with_node(state, |node| {
        Ok((StatusCode::OK, json!(node.list_block_types())))
    })
    .await
}
