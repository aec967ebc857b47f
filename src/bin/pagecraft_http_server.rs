use clap::Parser;
use log::info;
use pagecraft::pagecraft_node::{load_node_config, PageCraftHttpServer, PageCraftNode};

/// Command line options for the HTTP server binary.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Port for the HTTP server
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

/// Main entry point for the PageCraft HTTP server.
///
/// Loads configuration, opens the document store (seeding the draft and
/// published documents on first boot), and serves the block catalog and
/// site document endpoints.
///
/// # Command-Line Arguments
///
/// * `--port <PORT>` - Port for the HTTP server (default: 3000)
///
/// # Environment Variables
///
/// * `NODE_CONFIG` - Path to the node configuration file (default: config/node_config.json)
/// * `RUST_LOG` - Log filter (default: info)
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pagecraft::logging::init().ok();
    info!("Starting PageCraft HTTP Server...");

    let Cli { port } = Cli::parse();

    let config = load_node_config(None, Some(port))?;
    info!("Config loaded successfully");

    let bind_address = config.http_bind_address.clone();
    let node = PageCraftNode::new(config)?;
    info!("Node loaded successfully");

    info!("Starting HTTP server on {}...", bind_address);
    let http_server = PageCraftHttpServer::new(node, &bind_address);
    http_server.run().await?;

    Ok(())
}
