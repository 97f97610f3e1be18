//! REST API for the vehicle storage quoting service.
//!
//! Provides endpoints for:
//! - Health and application info
//! - Demo catalog retrieval
//! - Location/index summaries
//! - Quote requests against the precomputed combination index
//! - Swagger UI at /q/swagger-ui

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::demo_data::{available_datasets, generate_by_name};
use crate::domain::{DemandRequest, Listing, StorageCatalog};
use crate::dto::{
    DemandRequestDto, HealthResponse, InfoResponse, LocationSummaryDto, QuoteDto,
};
use crate::solver::CombinationIndex;

/// Application state shared across handlers.
///
/// The catalog and the combination index are built once before the server
/// starts and are read-only afterwards, so concurrent handlers share them
/// through the `Arc` without any locking.
pub struct AppState {
    /// The loaded listing catalog, grouped by location.
    pub catalog: StorageCatalog,
    /// Precomputed, price-sorted combination tables.
    pub index: CombinationIndex,
}

impl AppState {
    /// Builds the state, precomputing the combination index.
    pub fn new(catalog: StorageCatalog) -> Self {
        let index = CombinationIndex::build(&catalog);
        Self { catalog, index }
    }
}

/// Creates the API router with CORS and Swagger UI enabled.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health & Info
        .route("/health", get(health))
        .route("/info", get(info_endpoint))
        // Catalog
        .route("/locations", get(list_locations))
        // Demo data
        .route("/demo-data", get(list_demo_data))
        .route("/demo-data/{name}", get(get_demo_data))
        // Quotes
        .route("/quotes", post(create_quotes))
        // Swagger UI at /q/swagger-ui (Quarkus-style path)
        .merge(SwaggerUi::new("/q/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(state)
}

// ============================================================================
// Health & Info
// ============================================================================

/// GET /health - Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "UP" })
}

/// GET /info - Application info endpoint.
#[utoipa::path(
    get,
    path = "/info",
    responses((status = 200, description = "Application info", body = InfoResponse))
)]
async fn info_endpoint() -> Json<InfoResponse> {
    Json(InfoResponse {
        name: "Vehicle Storage",
        version: env!("CARGO_PKG_VERSION"),
        engine: "cheapest-combination search with greedy row packing",
    })
}

// ============================================================================
// Catalog
// ============================================================================

/// GET /locations - Summary of indexed locations.
#[utoipa::path(
    get,
    path = "/locations",
    responses((status = 200, description = "Per-location index summary", body = Vec<LocationSummaryDto>))
)]
async fn list_locations(State(state): State<Arc<AppState>>) -> Json<Vec<LocationSummaryDto>> {
    let summaries = state
        .catalog
        .locations()
        .map(|group| LocationSummaryDto {
            location_id: group.location_id.clone(),
            listing_count: group.listings.len(),
            combination_count: state
                .index
                .combinations_for(&group.location_id)
                .map_or(0, |table| table.len()),
        })
        .collect();
    Json(summaries)
}

// ============================================================================
// Demo Data
// ============================================================================

/// GET /demo-data - List available demo datasets.
#[utoipa::path(
    get,
    path = "/demo-data",
    responses((status = 200, description = "List of demo dataset names", body = Vec<String>))
)]
async fn list_demo_data() -> Json<Vec<&'static str>> {
    Json(available_datasets().to_vec())
}

/// GET /demo-data/{name} - Get a specific demo dataset.
#[utoipa::path(
    get,
    path = "/demo-data/{name}",
    params(("name" = String, Path, description = "Demo dataset name")),
    responses(
        (status = 200, description = "Demo listings retrieved", body = Vec<Listing>),
        (status = 404, description = "Dataset not found")
    )
)]
async fn get_demo_data(Path(name): Path<String>) -> Result<Json<Vec<Listing>>, StatusCode> {
    match generate_by_name(&name) {
        Some(listings) => Ok(Json(listings)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

// ============================================================================
// Quotes
// ============================================================================

/// POST /quotes - Quote every location for a vehicle storage demand.
///
/// Expands the demand lines into vehicles, then scans each location's
/// presorted combination table for its cheapest feasible listing subset.
/// Locations with no feasible combination are omitted from the response.
#[utoipa::path(
    post,
    path = "/quotes",
    request_body = Vec<DemandRequestDto>,
    responses((status = 200, description = "Quotes sorted by total price", body = Vec<QuoteDto>))
)]
async fn create_quotes(
    State(state): State<Arc<AppState>>,
    Json(demand): Json<Vec<DemandRequestDto>>,
) -> Json<Vec<QuoteDto>> {
    let requests: Vec<DemandRequest> = demand.into_iter().map(Into::into).collect();
    let quotes = state.index.process_request(&requests);

    info!(
        demand_lines = requests.len(),
        quoted_locations = quotes.len(),
        "processed quote request"
    );

    Json(quotes.iter().map(QuoteDto::from).collect())
}

// ============================================================================
// OpenAPI Documentation
// ============================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        info_endpoint,
        list_locations,
        list_demo_data,
        get_demo_data,
        create_quotes,
    ),
    components(schemas(
        HealthResponse,
        InfoResponse,
        LocationSummaryDto,
        Listing,
        DemandRequestDto,
        QuoteDto,
    ))
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo_data::default_listings;

    #[test]
    fn test_state_indexes_every_catalog_location() {
        let state = AppState::new(StorageCatalog::from_listings(default_listings()));
        assert_eq!(
            state.index.location_count(),
            state.catalog.location_count()
        );
        for group in state.catalog.locations() {
            let table = state.index.combinations_for(&group.location_id).unwrap();
            assert_eq!(table.len(), 1 << group.listings.len());
        }
    }
}
