//! DTOs for REST API requests/responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DemandRequest;
use crate::solver::Quote;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status indicator ("UP" when healthy).
    pub status: &'static str,
}

/// Application info response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    /// Application name.
    pub name: &'static str,
    /// Application version.
    pub version: &'static str,
    /// Engine description.
    pub engine: &'static str,
}

/// One demand line in a quote request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct DemandRequestDto {
    /// Vehicle length in feet.
    pub length: f64,
    /// Number of vehicles of this length.
    pub quantity: u32,
}

impl From<DemandRequestDto> for DemandRequest {
    fn from(dto: DemandRequestDto) -> Self {
        Self {
            length: dto.length,
            quantity: dto.quantity,
        }
    }
}

/// One location's quote in a response, cheapest listings first overall.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuoteDto {
    /// The quoted location.
    pub location_id: String,
    /// IDs of the chosen listings.
    pub listing_ids: Vec<String>,
    /// Total price of the chosen listings.
    pub total_price_in_cents: i64,
}

impl From<&Quote> for QuoteDto {
    fn from(quote: &Quote) -> Self {
        Self {
            location_id: quote.location_id.clone(),
            listing_ids: quote.listing_ids.clone(),
            total_price_in_cents: quote.total_price_in_cents,
        }
    }
}

/// Per-location summary of the built index.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummaryDto {
    /// Location identifier.
    pub location_id: String,
    /// Number of listings at the location.
    pub listing_count: usize,
    /// Number of precomputed combinations (2^listings).
    pub combination_count: usize,
}
