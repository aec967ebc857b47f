//! Node implementation: the composition service plus its HTTP transport and
//! configuration.

pub mod config;
pub mod http_helpers;
pub mod http_server;
pub mod node;
pub mod schema_routes;
pub mod site_routes;

pub use config::{load_node_config, NodeConfig};
pub use http_server::{AppState, PageCraftHttpServer};
pub use node::PageCraftNode;
