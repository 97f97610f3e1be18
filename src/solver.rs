//! Cheapest-combination search engine.
//!
//! # Overview
//!
//! Three pieces, composed in dependency order:
//! - [`generate_combinations`]: power set of one location's listings
//! - [`can_fit`]: greedy row-packing feasibility check
//! - [`CombinationIndex`]: precomputed, price-sorted per-location tables
//!   with cheapest-first search and request aggregation
//!
//! # Design
//!
//! The index is built once at startup and is immutable afterwards, so it can
//! be shared behind an `Arc` across request handlers without locking. All
//! per-request working state (remaining vehicles, row capacities) lives on
//! fresh copies inside [`can_fit`].

use tracing::{debug, info, warn};

use crate::domain::{
    expand_vehicles, Combination, DemandRequest, Listing, StorageCatalog, Vehicle,
};

/// Default upper bound on listings per indexed location.
///
/// A location with `n` listings yields `2^n` combinations, so the table
/// size doubles with every listing. 20 listings is ~1M combinations; beyond
/// that the precomputation step stops being a startup cost and starts being
/// a liability.
pub const DEFAULT_MAX_LISTINGS_PER_LOCATION: usize = 20;

/// Generates every subset (the power set) of the given listings.
///
/// Uses incremental doubling: starting from the empty subset, each listing
/// extends every subset generated so far. Subset `k` (binary over input
/// order: bit `i` set means listing `i` included) lands at index `k`, with
/// the empty subset first. The output is `2^n` combinations; callers must
/// bound `n`.
///
/// # Examples
///
/// ```
/// use vehicle_storage::domain::Listing;
/// use vehicle_storage::solver::generate_combinations;
///
/// let listings = vec![
///     Listing::new("a", 50.0, 20.0, "l", 5_000),
///     Listing::new("b", 30.0, 10.0, "l", 8_000),
/// ];
/// let combos = generate_combinations(&listings);
///
/// assert_eq!(combos.len(), 4);
/// assert!(combos[0].is_empty());
/// assert_eq!(combos[1].listing_ids(), vec!["a"]);
/// assert_eq!(combos[2].listing_ids(), vec!["b"]);
/// assert_eq!(combos[3].listing_ids(), vec!["a", "b"]);
/// ```
pub fn generate_combinations(listings: &[Listing]) -> Vec<Combination> {
    let mut result = vec![Combination::new(Vec::new())];
    for listing in listings {
        let extended: Vec<Combination> = result
            .iter()
            .map(|combo| {
                let mut selected = combo.listings.clone();
                selected.push(listing.clone());
                Combination::new(selected)
            })
            .collect();
        result.extend(extended);
    }
    result
}

/// Checks whether every vehicle fits into the rows of the selected listings.
///
/// Greedy heuristic, not an exact packer: per listing, vehicles are re-sorted
/// longest-first and each is tried against the row with the most remaining
/// length. A vehicle that does not fit the best row is skipped for this
/// listing and carried to the next one. The specific tie-break order is part
/// of the engine's observable behavior and must not be altered.
///
/// A listing narrower than one row width offers zero rows and places nothing.
///
/// # Examples
///
/// ```
/// use vehicle_storage::domain::{Listing, Vehicle};
/// use vehicle_storage::solver::can_fit;
///
/// // Two 10-foot rows of 50 feet each hold two 40-foot vehicles...
/// let listing = Listing::new("a", 50.0, 20.0, "l", 10_000);
/// let two = vec![Vehicle::new(40.0); 2];
/// assert!(can_fit(std::slice::from_ref(&listing), &two));
///
/// // ...but not three.
/// let three = vec![Vehicle::new(40.0); 3];
/// assert!(!can_fit(std::slice::from_ref(&listing), &three));
/// ```
pub fn can_fit(selected_listings: &[Listing], vehicles: &[Vehicle]) -> bool {
    let mut remaining: Vec<Vehicle> = vehicles.to_vec();

    for listing in selected_listings {
        let rows = listing.row_count();
        if rows == 0 {
            continue;
        }

        // Remaining length per row; every row starts at full listing length.
        let mut space = vec![listing.row_length(); rows];

        // Place the hardest (longest) vehicles first.
        remaining.sort_by(|a, b| b.length.total_cmp(&a.length));

        let mut i = 0;
        while i < remaining.len() {
            // Best row = most remaining length.
            space.sort_by(|a, b| b.total_cmp(a));

            if space[0] >= remaining[i].length {
                space[0] -= remaining[i].length;
                remaining.remove(i);
            } else {
                // Doesn't fit anywhere in this listing; try the next
                // (shorter) vehicle against the same best row.
                i += 1;
            }
        }
    }

    remaining.is_empty()
}

/// Why a location produced no quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// No precomputed combination table exists for the location. Indicates
    /// missing or skipped data, not a demand that cannot be met.
    NoCombinations,
    /// Every combination failed the fitting check. A legitimate business
    /// outcome, not a fault.
    Infeasible,
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::NoCombinations => write!(f, "no combinations available for location"),
            SearchError::Infeasible => write!(f, "no feasible combination for demand"),
        }
    }
}

impl std::error::Error for SearchError {}

/// A priced answer for one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// The location this quote is for.
    pub location_id: String,
    /// IDs of the chosen listings, in catalog order.
    pub listing_ids: Vec<String>,
    /// Total price of the chosen listings.
    pub total_price_in_cents: i64,
}

/// One location's precomputed combination table.
struct LocationTable {
    location_id: String,
    /// All combinations, stably sorted ascending by total price.
    combinations: Vec<Combination>,
}

/// Precomputed, price-sorted combination tables for every catalog location.
///
/// Built once at startup from a [`StorageCatalog`] and read-only afterwards.
/// Because each table is sorted ascending by total price, the per-request
/// search is a cheapest-first linear scan: the first feasible hit is the
/// cheapest among all `2^n` candidates for that location.
///
/// # Examples
///
/// ```
/// use vehicle_storage::domain::{DemandRequest, Listing, StorageCatalog};
/// use vehicle_storage::solver::CombinationIndex;
///
/// let catalog = StorageCatalog::from_listings(vec![
///     Listing::new("abc", 50.0, 20.0, "east", 10_000),
/// ]);
/// let index = CombinationIndex::build(&catalog);
///
/// let quotes = index.process_request(&[DemandRequest { length: 40.0, quantity: 2 }]);
/// assert_eq!(quotes.len(), 1);
/// assert_eq!(quotes[0].listing_ids, vec!["abc"]);
/// assert_eq!(quotes[0].total_price_in_cents, 10_000);
/// ```
pub struct CombinationIndex {
    tables: Vec<LocationTable>,
}

impl CombinationIndex {
    /// Builds the index with the default per-location listing cap.
    pub fn build(catalog: &StorageCatalog) -> Self {
        Self::build_with_limit(catalog, DEFAULT_MAX_LISTINGS_PER_LOCATION)
    }

    /// Builds the index, skipping locations with more listings than `limit`.
    ///
    /// Enumeration is exponential (`2^n` combinations for `n` listings), so
    /// over-cap locations are left unindexed rather than stalling startup.
    /// They subsequently behave as [`SearchError::NoCombinations`].
    pub fn build_with_limit(catalog: &StorageCatalog, limit: usize) -> Self {
        let mut tables = Vec::with_capacity(catalog.location_count());

        for group in catalog.locations() {
            if group.listings.len() > limit {
                warn!(
                    location = %group.location_id,
                    listings = group.listings.len(),
                    limit,
                    "location exceeds listing cap, skipping combination table"
                );
                continue;
            }

            let mut combinations = generate_combinations(&group.listings);
            // Stable sort keeps generation order among equal prices.
            combinations.sort_by_key(|combo| combo.total_price_in_cents);

            debug!(
                location = %group.location_id,
                listings = group.listings.len(),
                combinations = combinations.len(),
                "indexed location"
            );

            tables.push(LocationTable {
                location_id: group.location_id.clone(),
                combinations,
            });
        }

        info!(
            locations = tables.len(),
            combinations = tables.iter().map(|t| t.combinations.len()).sum::<usize>(),
            "combination index built"
        );

        Self { tables }
    }

    /// Returns one location's sorted combination table, if indexed.
    pub fn combinations_for(&self, location_id: &str) -> Option<&[Combination]> {
        self.tables
            .iter()
            .find(|table| table.location_id == location_id)
            .map(|table| table.combinations.as_slice())
    }

    /// Finds the cheapest feasible combination for one location.
    ///
    /// Scans the presorted table in ascending-price order and returns the
    /// first combination accepted by [`can_fit`]. Distinguishes a missing
    /// table ([`SearchError::NoCombinations`]) from a demand nothing can
    /// hold ([`SearchError::Infeasible`]).
    pub fn cheapest_for_location(
        &self,
        location_id: &str,
        vehicles: &[Vehicle],
    ) -> Result<&Combination, SearchError> {
        let combinations = self
            .combinations_for(location_id)
            .ok_or(SearchError::NoCombinations)?;

        combinations
            .iter()
            .find(|combo| can_fit(&combo.listings, vehicles))
            .ok_or(SearchError::Infeasible)
    }

    /// Quotes every location for the given demand.
    ///
    /// Expands the demand into vehicles, searches each indexed location, and
    /// returns the feasible ones sorted ascending by total price. Locations
    /// with no feasible combination are omitted, not reported as errors.
    pub fn process_request(&self, requests: &[DemandRequest]) -> Vec<Quote> {
        let vehicles = expand_vehicles(requests);

        let mut quotes = Vec::new();
        for table in &self.tables {
            match self.cheapest_for_location(&table.location_id, &vehicles) {
                Ok(combination) => quotes.push(Quote {
                    location_id: table.location_id.clone(),
                    listing_ids: combination.listing_ids(),
                    total_price_in_cents: combination.total_price_in_cents,
                }),
                Err(reason) => {
                    debug!(location = %table.location_id, %reason, "location omitted from quotes");
                }
            }
        }

        // Stable: catalog order breaks price ties.
        quotes.sort_by_key(|quote| quote.total_price_in_cents);
        quotes
    }

    /// Number of indexed locations.
    pub fn location_count(&self) -> usize {
        self.tables.len()
    }

    /// Total combinations across all indexed locations.
    pub fn combination_count(&self) -> usize {
        self.tables.iter().map(|t| t.combinations.len()).sum()
    }

    /// Iterates `(location_id, combination_count)` pairs in catalog order.
    pub fn location_summaries(&self) -> impl Iterator<Item = (&str, usize)> {
        self.tables
            .iter()
            .map(|t| (t.location_id.as_str(), t.combinations.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, length: f64, width: f64, location: &str, price: i64) -> Listing {
        Listing::new(id, length, width, location, price)
    }

    fn vehicles(lengths: &[f64]) -> Vec<Vehicle> {
        lengths.iter().copied().map(Vehicle::new).collect()
    }

    fn index_of(listings: Vec<Listing>) -> CombinationIndex {
        CombinationIndex::build(&StorageCatalog::from_listings(listings))
    }

    #[test]
    fn test_power_set_size_and_single_empty() {
        for n in 0..=6 {
            let listings: Vec<Listing> = (0..n)
                .map(|i| listing(&format!("l{}", i), 50.0, 10.0, "loc", 100 * (i as i64 + 1)))
                .collect();
            let combos = generate_combinations(&listings);

            assert_eq!(combos.len(), 1 << n);
            assert_eq!(combos.iter().filter(|c| c.is_empty()).count(), 1);
            assert!(combos[0].is_empty());
        }
    }

    #[test]
    fn test_doubling_order_is_binary_counting() {
        let listings = vec![
            listing("l0", 50.0, 10.0, "loc", 100),
            listing("l1", 50.0, 10.0, "loc", 200),
            listing("l2", 50.0, 10.0, "loc", 400),
        ];
        let combos = generate_combinations(&listings);

        // Subset k in binary: bit i set means listing i included.
        for (k, combo) in combos.iter().enumerate() {
            let expected: Vec<String> = (0..3)
                .filter(|i| k & (1 << i) != 0)
                .map(|i| format!("l{}", i))
                .collect();
            assert_eq!(combo.listing_ids(), expected, "subset {}", k);
        }
    }

    #[test]
    fn test_combination_price_is_sum() {
        let listings = vec![
            listing("a", 50.0, 10.0, "loc", 100),
            listing("b", 50.0, 10.0, "loc", 250),
        ];
        for combo in generate_combinations(&listings) {
            let sum: i64 = combo.listings.iter().map(|l| l.price_in_cents).sum();
            assert_eq!(combo.total_price_in_cents, sum);
        }
    }

    #[test]
    fn test_index_tables_sorted_by_price() {
        let index = index_of(vec![
            listing("a", 50.0, 20.0, "loc", 7_000),
            listing("b", 30.0, 10.0, "loc", 2_000),
            listing("c", 40.0, 10.0, "loc", 5_000),
        ]);

        let table = index.combinations_for("loc").unwrap();
        assert_eq!(table.len(), 8);
        for pair in table.windows(2) {
            assert!(pair[0].total_price_in_cents <= pair[1].total_price_in_cents);
        }
    }

    #[test]
    fn test_can_fit_empty_demand() {
        assert!(can_fit(&[], &[]));
        assert!(can_fit(&[listing("a", 50.0, 20.0, "loc", 0)], &[]));
    }

    #[test]
    fn test_can_fit_two_vehicles_one_per_row() {
        // Scenario A: width 20 => 2 rows of 50 feet.
        let lot = [listing("abc", 50.0, 20.0, "loc", 10_000)];
        assert!(can_fit(&lot, &vehicles(&[40.0, 40.0])));
    }

    #[test]
    fn test_can_fit_rejects_third_vehicle() {
        // Scenario B: 2 rows cannot take a third 40-footer.
        let lot = [listing("abc", 50.0, 20.0, "loc", 10_000)];
        assert!(!can_fit(&lot, &vehicles(&[40.0, 40.0, 40.0])));
    }

    #[test]
    fn test_can_fit_packs_multiple_per_row() {
        // One 50-foot row takes a 30 and a 20 but not a 30 and a 25.
        let lot = [listing("abc", 50.0, 10.0, "loc", 0)];
        assert!(can_fit(&lot, &vehicles(&[30.0, 20.0])));
        assert!(!can_fit(&lot, &vehicles(&[30.0, 25.0])));
    }

    #[test]
    fn test_can_fit_narrow_listing_holds_nothing() {
        let lot = [listing("narrow", 100.0, 9.0, "loc", 0)];
        assert!(!can_fit(&lot, &vehicles(&[5.0])));
        assert!(can_fit(&lot, &[]));
    }

    #[test]
    fn test_can_fit_oversized_vehicle() {
        let lot = [
            listing("a", 30.0, 20.0, "loc", 0),
            listing("b", 35.0, 10.0, "loc", 0),
        ];
        assert!(!can_fit(&lot, &vehicles(&[40.0])));
    }

    #[test]
    fn test_can_fit_carries_unplaced_vehicles_forward() {
        // First listing takes the 45-footer, second takes the two 20s.
        let lot = [
            listing("a", 45.0, 10.0, "loc", 0),
            listing("b", 20.0, 20.0, "loc", 0),
        ];
        assert!(can_fit(&lot, &vehicles(&[20.0, 45.0, 20.0])));
    }

    #[test]
    fn test_can_fit_monotone_in_capacity() {
        let demand = vehicles(&[40.0, 35.0, 20.0, 20.0]);
        let base = vec![
            listing("a", 60.0, 20.0, "loc", 0),
            listing("b", 40.0, 10.0, "loc", 0),
        ];
        assert!(can_fit(&base, &demand));

        // Adding a listing never turns a feasible selection infeasible.
        let mut extended = base.clone();
        extended.push(listing("c", 15.0, 10.0, "loc", 0));
        assert!(can_fit(&extended, &demand));
    }

    #[test]
    fn test_cheapest_prefers_cheaper_sufficient_listing() {
        // Scenario C: both listings individually sufficient; the 5000 one wins.
        let index = index_of(vec![
            listing("pricey", 60.0, 20.0, "loc", 8_000),
            listing("cheap", 60.0, 20.0, "loc", 5_000),
        ]);

        let combo = index
            .cheapest_for_location("loc", &vehicles(&[40.0, 40.0]))
            .unwrap();
        assert_eq!(combo.listing_ids(), vec!["cheap"]);
        assert_eq!(combo.total_price_in_cents, 5_000);
    }

    #[test]
    fn test_empty_demand_resolves_to_empty_combination() {
        // Scenario D: every location quotes its empty combination at 0.
        let index = index_of(vec![
            listing("a", 50.0, 20.0, "east", 5_000),
            listing("b", 30.0, 10.0, "west", 8_000),
        ]);

        let quotes = index.process_request(&[]);
        assert_eq!(quotes.len(), 2);
        for quote in &quotes {
            assert!(quote.listing_ids.is_empty());
            assert_eq!(quote.total_price_in_cents, 0);
        }
    }

    #[test]
    fn test_unknown_location_vs_infeasible() {
        let index = index_of(vec![listing("a", 50.0, 20.0, "east", 5_000)]);
        let demand = vehicles(&[40.0, 40.0, 40.0]);

        assert_eq!(
            index.cheapest_for_location("nowhere", &demand).unwrap_err(),
            SearchError::NoCombinations
        );
        assert_eq!(
            index.cheapest_for_location("east", &demand).unwrap_err(),
            SearchError::Infeasible
        );
    }

    #[test]
    fn test_infeasible_location_omitted_from_quotes() {
        // Scenario B aggregate: no other listing at the location, so the
        // location silently drops out.
        let index = index_of(vec![
            listing("small", 50.0, 20.0, "tight", 10_000),
            listing("big", 50.0, 40.0, "roomy", 20_000),
        ]);

        let quotes = index.process_request(&[DemandRequest {
            length: 40.0,
            quantity: 3,
        }]);
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].location_id, "roomy");
    }

    #[test]
    fn test_quotes_sorted_by_total_price() {
        let index = index_of(vec![
            listing("a", 60.0, 20.0, "expensive", 9_000),
            listing("b", 60.0, 20.0, "cheap", 4_000),
            listing("c", 60.0, 20.0, "middle", 6_500),
        ]);

        let quotes = index.process_request(&[DemandRequest {
            length: 40.0,
            quantity: 1,
        }]);
        let order: Vec<&str> = quotes.iter().map(|q| q.location_id.as_str()).collect();
        assert_eq!(order, vec!["cheap", "middle", "expensive"]);
    }

    #[test]
    fn test_search_is_idempotent() {
        let index = index_of(vec![
            listing("a", 50.0, 20.0, "loc", 7_000),
            listing("b", 30.0, 10.0, "loc", 2_000),
        ]);
        let demand = vehicles(&[25.0, 25.0]);

        let first = index.cheapest_for_location("loc", &demand).unwrap().clone();
        let second = index.cheapest_for_location("loc", &demand).unwrap();
        assert_eq!(first.listing_ids(), second.listing_ids());
        assert_eq!(first.total_price_in_cents, second.total_price_in_cents);
    }

    #[test]
    fn test_over_cap_location_is_skipped() {
        let mut listings: Vec<Listing> = (0..4)
            .map(|i| listing(&format!("l{}", i), 50.0, 10.0, "crowded", 100))
            .collect();
        listings.push(listing("solo", 50.0, 10.0, "calm", 100));

        let catalog = StorageCatalog::from_listings(listings);
        let index = CombinationIndex::build_with_limit(&catalog, 3);

        assert!(index.combinations_for("crowded").is_none());
        assert_eq!(index.combinations_for("calm").unwrap().len(), 2);
        assert_eq!(
            index
                .cheapest_for_location("crowded", &[])
                .unwrap_err(),
            SearchError::NoCombinations
        );
    }

    #[test]
    fn test_cheaper_pair_beats_single_when_single_insufficient() {
        // Two cheap narrow lots together beat one sufficient wide lot.
        let index = index_of(vec![
            listing("wide", 40.0, 20.0, "loc", 9_000),
            listing("n1", 40.0, 10.0, "loc", 3_000),
            listing("n2", 40.0, 10.0, "loc", 3_500),
        ]);

        let combo = index
            .cheapest_for_location("loc", &vehicles(&[40.0, 40.0]))
            .unwrap();
        assert_eq!(combo.listing_ids(), vec!["n1", "n2"]);
        assert_eq!(combo.total_price_in_cents, 6_500);
    }
}
