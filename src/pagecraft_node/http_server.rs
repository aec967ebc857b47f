use super::{schema_routes, site_routes};
use crate::error::PageCraftResult;
use crate::pagecraft_node::PageCraftNode;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer as ActixHttpServer};
use log::info;

/// HTTP server for a PageCraft node.
///
/// PageCraftHttpServer is the transport collaborator: it exposes exactly the
/// five request handlers the editing and public surfaces invoke — list block
/// types, read published, read draft, save draft, publish — and maps crate
/// errors onto client/server error responses. It holds no state of its own;
/// every request is one call into the node.
pub struct PageCraftHttpServer {
    /// The PageCraft node
    node: PageCraftNode,
    /// The HTTP server bind address
    bind_address: String,
}

/// Shared application state for the HTTP server.
pub struct AppState {
    /// The PageCraft node
    pub node: PageCraftNode,
}

impl PageCraftHttpServer {
    /// Create a new HTTP server serving the given node.
    ///
    /// # Arguments
    ///
    /// * `node` - The PageCraftNode instance to use for processing requests
    /// * `bind_address` - The address to bind to (e.g., "127.0.0.1:3000")
    pub fn new(node: PageCraftNode, bind_address: &str) -> Self {
        Self {
            node,
            bind_address: bind_address.to_string(),
        }
    }

    /// Run the HTTP server.
    ///
    /// Starts the server and accepts connections until the process is shut
    /// down.
    ///
    /// # Errors
    ///
    /// Returns a `PageCraftError` if:
    /// * There is an error binding to the specified address
    /// * There is an error running the server
    pub async fn run(&self) -> PageCraftResult<()> {
        info!("HTTP server running on {}", self.bind_address);

        let app_state = web::Data::new(AppState {
            node: self.node.clone(),
        });

        ActixHttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(app_state.clone())
                .route(
                    "/api/blocks",
                    web::get().to(schema_routes::list_block_types),
                )
                .route("/api/site", web::get().to(site_routes::get_site))
                .route("/api/admin/site", web::get().to(site_routes::get_draft))
                .route(
                    "/api/admin/site/save",
                    web::post().to(site_routes::save_draft),
                )
                .route(
                    "/api/admin/site/publish",
                    web::post().to(site_routes::publish_draft),
                )
        })
        .bind(&self.bind_address)?
        .run()
        .await?;

        Ok(())
    }
}
