//! Vehicle Storage Quoting Service - Axum Server
//!
//! Run with: cargo run
//! Then open: http://localhost:7860/q/swagger-ui
//!
//! Set `LISTINGS_FILE` to serve a JSON listing catalog instead of the
//! built-in demo data.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use vehicle_storage::api::AppState;
use vehicle_storage::domain::StorageCatalog;
use vehicle_storage::{api, console, demo_data, loader};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("vehicle_storage=info".parse().unwrap()),
        )
        .init();

    console::print_banner();

    let catalog = match std::env::var("LISTINGS_FILE") {
        Ok(path) => match loader::load_catalog(&path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Failed to load listing catalog from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        Err(_) => StorageCatalog::from_listings(demo_data::default_listings()),
    };

    let state = Arc::new(AppState::new(catalog));
    console::print_index_summary(&state.catalog, &state.index);

    let app = api::create_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], 7860));
    println!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
