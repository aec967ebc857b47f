use super::http_helpers::with_node;
use super::http_server::AppState;
use crate::site::SiteDocument;
use actix_web::{http::StatusCode, web, Responder};
use log::{error, info};
use serde_json::json;

/// Get the published site document.
pub async fn get_site(state: web::Data<AppState>) -> impl Responder {
    with_node(state, |node| {
        node.get_published()
            .map(|doc| (StatusCode::OK, json!(doc)))
    })
    .await
}

/// Get the draft site document.
pub async fn get_draft(state: web::Data<AppState>) -> impl Responder {
    with_node(state, |node| {
        node.get_draft().map(|doc| (StatusCode::OK, json!(doc)))
    })
    .await
}

/// Replace the draft wholesale with the posted document.
pub async fn save_draft(
    document: web::Json<SiteDocument>,
    state: web::Data<AppState>,
) -> impl Responder {
    with_node(state, move |node| {
        node.save_draft(&document.into_inner())
            .map(|_| (StatusCode::OK, json!({"ok": true})))
            .map_err(|e| {
                error!("Failed to save draft: {}", e);
                e
            })
    })
    .await
}

/// Publish the current draft.
pub async fn publish_draft(state: web::Data<AppState>) -> impl Responder {
    info!("Received request to publish draft");
    with_node(state, |node| {
        node.publish_draft()
            .map(|_| (StatusCode::OK, json!({"ok": true})))
            .map_err(|e| {
                error!("Failed to publish draft: {}", e);
                e
            })
    })
    .await
}
