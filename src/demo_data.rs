//! Demo listing catalogs for the vehicle storage service.
//!
//! Provides three datasets:
//! - Denver (3 locations, hand-picked lots)
//! - Portland (4 locations, hand-picked lots)
//! - Generated (6 locations, seeded random lots)
//!
//! Lot dimensions follow common storage formats: single RV rows (10-12 ft
//! wide), double lots (20-25 ft), and small yards (30-40 ft).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::Listing;
use crate::solver::DEFAULT_MAX_LISTINGS_PER_LOCATION;

/// Fixed seed so the generated dataset is identical across runs.
const GENERATED_SEED: u64 = 47;

/// A hand-picked demo lot.
struct LotData {
    id: &'static str,
    length: f64,
    width: f64,
    location_id: &'static str,
    price_in_cents: i64,
}

// ============================================================================
// Denver Data
// ============================================================================

const DENVER_LOTS: &[LotData] = &[
    // North yard: large paved lot, priced per half
    LotData { id: "den-n1", length: 60.0, width: 20.0, location_id: "denver-north", price_in_cents: 14_500 },
    LotData { id: "den-n2", length: 60.0, width: 20.0, location_id: "denver-north", price_in_cents: 14_500 },
    LotData { id: "den-n3", length: 35.0, width: 10.0, location_id: "denver-north", price_in_cents: 6_000 },
    // Airport-adjacent strip: narrow singles
    LotData { id: "den-a1", length: 45.0, width: 10.0, location_id: "denver-airport", price_in_cents: 7_500 },
    LotData { id: "den-a2", length: 45.0, width: 10.0, location_id: "denver-airport", price_in_cents: 7_500 },
    LotData { id: "den-a3", length: 45.0, width: 12.0, location_id: "denver-airport", price_in_cents: 8_000 },
    LotData { id: "den-a4", length: 30.0, width: 10.0, location_id: "denver-airport", price_in_cents: 5_000 },
    // Downtown garage: one wide bay, premium
    LotData { id: "den-d1", length: 40.0, width: 30.0, location_id: "denver-downtown", price_in_cents: 22_000 },
    LotData { id: "den-d2", length: 25.0, width: 10.0, location_id: "denver-downtown", price_in_cents: 9_000 },
];

// ============================================================================
// Portland Data
// ============================================================================

const PORTLAND_LOTS: &[LotData] = &[
    LotData { id: "pdx-e1", length: 50.0, width: 20.0, location_id: "portland-east", price_in_cents: 12_000 },
    LotData { id: "pdx-e2", length: 50.0, width: 10.0, location_id: "portland-east", price_in_cents: 6_500 },
    LotData { id: "pdx-e3", length: 40.0, width: 10.0, location_id: "portland-east", price_in_cents: 5_500 },
    LotData { id: "pdx-w1", length: 70.0, width: 25.0, location_id: "portland-west", price_in_cents: 18_000 },
    LotData { id: "pdx-w2", length: 35.0, width: 12.0, location_id: "portland-west", price_in_cents: 7_000 },
    LotData { id: "pdx-s1", length: 45.0, width: 10.0, location_id: "portland-south", price_in_cents: 6_000 },
    LotData { id: "pdx-s2", length: 45.0, width: 10.0, location_id: "portland-south", price_in_cents: 6_000 },
    LotData { id: "pdx-s3", length: 45.0, width: 10.0, location_id: "portland-south", price_in_cents: 6_000 },
    // A driveway too narrow for any row; prices low for a reason
    LotData { id: "pdx-n1", length: 80.0, width: 8.0, location_id: "portland-north", price_in_cents: 2_000 },
    LotData { id: "pdx-n2", length: 40.0, width: 20.0, location_id: "portland-north", price_in_cents: 10_000 },
];

fn lots_to_listings(lots: &[LotData]) -> Vec<Listing> {
    lots.iter()
        .map(|lot| {
            Listing::new(
                lot.id,
                lot.length,
                lot.width,
                lot.location_id,
                lot.price_in_cents,
            )
        })
        .collect()
}

/// Generates the seeded random dataset: 6 locations, 4-8 lots each.
fn generate_random() -> Vec<Listing> {
    let mut rng = StdRng::seed_from_u64(GENERATED_SEED);
    let mut listings = Vec::new();

    for loc in 0..6 {
        let location_id = format!("gen-{}", loc);
        let lot_count = rng.gen_range(4..=8);

        for lot in 0..lot_count {
            // Lengths in 5-foot steps, widths in whole row multiples mostly,
            // with the occasional odd width that wastes space.
            let length = rng.gen_range(4..=16) as f64 * 5.0;
            let width = match rng.gen_range(0..10) {
                0 => 8.0,
                1..=5 => 10.0,
                6..=8 => 20.0,
                _ => 30.0,
            };
            let price_in_cents = rng.gen_range(30..=240) as i64 * 100;

            listings.push(Listing::new(
                format!("gen-{}-{}", loc, lot),
                length,
                width,
                location_id.clone(),
                price_in_cents,
            ));
        }
    }

    listings
}

/// Names of the available demo datasets.
pub fn available_datasets() -> &'static [&'static str] {
    &["denver", "portland", "generated"]
}

/// Generates a demo dataset by name; `None` if the name is unknown.
pub fn generate_by_name(name: &str) -> Option<Vec<Listing>> {
    match name {
        "denver" => Some(lots_to_listings(DENVER_LOTS)),
        "portland" => Some(lots_to_listings(PORTLAND_LOTS)),
        "generated" => Some(generate_random()),
        _ => None,
    }
}

/// The default catalog served when no listing file is configured.
pub fn default_listings() -> Vec<Listing> {
    let mut listings = lots_to_listings(DENVER_LOTS);
    listings.extend(lots_to_listings(PORTLAND_LOTS));
    listings
}
