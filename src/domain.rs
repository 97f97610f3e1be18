//! Domain model for vehicle storage quoting.
//!
//! # Overview
//!
//! Models a storage marketplace with:
//! - [`Listing`]s: rentable storage lots with row-based capacity
//! - [`Vehicle`]s: unit-width items to store, expanded from [`DemandRequest`]s
//! - [`Combination`]s: same-location listing subsets with a derived total price
//! - [`StorageCatalog`]: the full listing catalog, grouped by location
//!
//! # Design
//!
//! Listings are immutable once loaded. Vehicles exist only for the duration
//! of a request and have no identity beyond their length.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Width of one storage row in feet.
///
/// Every vehicle occupies exactly one row; a listing's row count is its
/// width divided by this constant, rounded down.
pub const VEHICLE_WIDTH_FT: f64 = 10.0;

/// A rentable storage lot at a location.
///
/// Capacity is row-based: a listing of width `w` offers `floor(w / 10)`
/// rows, each `length` feet long.
///
/// # Examples
///
/// ```
/// use vehicle_storage::domain::Listing;
///
/// let listing = Listing::new("abc", 50.0, 20.0, "loc-1", 10_000);
/// assert_eq!(listing.row_count(), 2);
/// assert_eq!(listing.row_length(), 50.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Listing {
    /// Unique listing identifier.
    pub id: String,
    /// Usable length in feet.
    pub length: f64,
    /// Usable width in feet; determines the row count.
    pub width: f64,
    /// Identifier of the location this listing belongs to.
    pub location_id: String,
    /// Rental price in the smallest currency unit.
    pub price_in_cents: i64,
}

impl Listing {
    /// Creates a new listing.
    pub fn new(
        id: impl Into<String>,
        length: f64,
        width: f64,
        location_id: impl Into<String>,
        price_in_cents: i64,
    ) -> Self {
        Self {
            id: id.into(),
            length,
            width,
            location_id: location_id.into(),
            price_in_cents,
        }
    }

    /// Number of 10-foot rows this listing offers.
    ///
    /// A listing narrower than one row width holds nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use vehicle_storage::domain::Listing;
    ///
    /// assert_eq!(Listing::new("a", 50.0, 35.0, "l", 0).row_count(), 3);
    /// assert_eq!(Listing::new("b", 50.0, 9.9, "l", 0).row_count(), 0);
    /// ```
    #[inline]
    pub fn row_count(&self) -> usize {
        (self.width / VEHICLE_WIDTH_FT).floor().max(0.0) as usize
    }

    /// Usable length of each row in feet.
    #[inline]
    pub fn row_length(&self) -> f64 {
        self.length
    }
}

/// A vehicle needing storage.
///
/// All vehicles share the fixed row width; only length matters for
/// placement, so any two vehicles of equal length are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vehicle {
    /// Length in feet.
    pub length: f64,
    /// Width in feet, always [`VEHICLE_WIDTH_FT`].
    pub width: f64,
}

impl Vehicle {
    /// Creates a vehicle of the given length with the fixed width.
    pub fn new(length: f64) -> Self {
        Self {
            length,
            width: VEHICLE_WIDTH_FT,
        }
    }
}

/// A demand line: `quantity` vehicles of `length` feet each.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct DemandRequest {
    /// Vehicle length in feet.
    pub length: f64,
    /// Number of vehicles of this length.
    pub quantity: u32,
}

/// Expands demand lines into a flat list of unit-width vehicles.
///
/// # Examples
///
/// ```
/// use vehicle_storage::domain::{expand_vehicles, DemandRequest};
///
/// let vehicles = expand_vehicles(&[
///     DemandRequest { length: 40.0, quantity: 2 },
///     DemandRequest { length: 25.0, quantity: 1 },
/// ]);
/// assert_eq!(vehicles.len(), 3);
/// assert_eq!(vehicles[0].length, 40.0);
/// assert_eq!(vehicles[2].length, 25.0);
/// ```
pub fn expand_vehicles(requests: &[DemandRequest]) -> Vec<Vehicle> {
    requests
        .iter()
        .flat_map(|req| (0..req.quantity).map(|_| Vehicle::new(req.length)))
        .collect()
}

/// A subset of one location's listings with its derived total price.
///
/// The total price is the sole sort key for the cheapest-first search.
/// The empty combination (no listings, price 0) is a valid candidate.
#[derive(Debug, Clone)]
pub struct Combination {
    /// The selected listings, in catalog order.
    pub listings: Vec<Listing>,
    /// Sum of the selected listings' prices.
    pub total_price_in_cents: i64,
}

impl Combination {
    /// Creates a combination, deriving its total price.
    ///
    /// # Examples
    ///
    /// ```
    /// use vehicle_storage::domain::{Combination, Listing};
    ///
    /// let combo = Combination::new(vec![
    ///     Listing::new("a", 50.0, 20.0, "l", 5_000),
    ///     Listing::new("b", 30.0, 10.0, "l", 8_000),
    /// ]);
    /// assert_eq!(combo.total_price_in_cents, 13_000);
    /// ```
    pub fn new(listings: Vec<Listing>) -> Self {
        let total_price_in_cents = listings.iter().map(|l| l.price_in_cents).sum();
        Self {
            listings,
            total_price_in_cents,
        }
    }

    /// Returns the IDs of the selected listings, in order.
    pub fn listing_ids(&self) -> Vec<String> {
        self.listings.iter().map(|l| l.id.clone()).collect()
    }

    /// Returns true if no listings are selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// One location's listings within the catalog.
#[derive(Debug, Clone)]
pub struct LocationListings {
    /// Location identifier shared by every listing below.
    pub location_id: String,
    /// The location's listings, in catalog insertion order.
    pub listings: Vec<Listing>,
}

/// The full listing catalog, grouped by location.
///
/// Locations are kept in first-seen order so that downstream iteration
/// (and therefore result tie ordering) is deterministic.
///
/// # Examples
///
/// ```
/// use vehicle_storage::domain::{Listing, StorageCatalog};
///
/// let catalog = StorageCatalog::from_listings(vec![
///     Listing::new("a", 50.0, 20.0, "east", 5_000),
///     Listing::new("b", 30.0, 10.0, "west", 8_000),
///     Listing::new("c", 40.0, 10.0, "east", 3_000),
/// ]);
///
/// assert_eq!(catalog.location_count(), 2);
/// assert_eq!(catalog.listing_count(), 3);
/// let east = catalog.listings_for("east").unwrap();
/// assert_eq!(east.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StorageCatalog {
    locations: Vec<LocationListings>,
}

impl StorageCatalog {
    /// Groups a flat listing collection by location, preserving first-seen
    /// location order and per-location listing order.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let mut locations: Vec<LocationListings> = Vec::new();
        for listing in listings {
            match locations
                .iter_mut()
                .find(|group| group.location_id == listing.location_id)
            {
                Some(group) => group.listings.push(listing),
                None => locations.push(LocationListings {
                    location_id: listing.location_id.clone(),
                    listings: vec![listing],
                }),
            }
        }
        Self { locations }
    }

    /// Iterates the locations in first-seen order.
    pub fn locations(&self) -> impl Iterator<Item = &LocationListings> {
        self.locations.iter()
    }

    /// Returns one location's listings, if the location is known.
    pub fn listings_for(&self, location_id: &str) -> Option<&[Listing]> {
        self.locations
            .iter()
            .find(|group| group.location_id == location_id)
            .map(|group| group.listings.as_slice())
    }

    /// Number of distinct locations.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Total number of listings across all locations.
    pub fn listing_count(&self) -> usize {
        self.locations.iter().map(|group| group.listings.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count() {
        assert_eq!(Listing::new("a", 50.0, 20.0, "l", 0).row_count(), 2);
        assert_eq!(Listing::new("a", 50.0, 10.0, "l", 0).row_count(), 1);
        assert_eq!(Listing::new("a", 50.0, 19.9, "l", 0).row_count(), 1);
        assert_eq!(Listing::new("a", 50.0, 5.0, "l", 0).row_count(), 0);
        assert_eq!(Listing::new("a", 50.0, -20.0, "l", 0).row_count(), 0);
    }

    #[test]
    fn test_expand_vehicles() {
        let vehicles = expand_vehicles(&[
            DemandRequest {
                length: 40.0,
                quantity: 3,
            },
            DemandRequest {
                length: 20.0,
                quantity: 0,
            },
        ]);
        assert_eq!(vehicles.len(), 3);
        assert!(vehicles.iter().all(|v| v.length == 40.0));
        assert!(vehicles.iter().all(|v| v.width == VEHICLE_WIDTH_FT));
    }

    #[test]
    fn test_empty_demand_expands_to_nothing() {
        assert!(expand_vehicles(&[]).is_empty());
    }

    #[test]
    fn test_combination_price() {
        let combo = Combination::new(vec![
            Listing::new("a", 50.0, 20.0, "l", 5_000),
            Listing::new("b", 30.0, 10.0, "l", 8_000),
        ]);
        assert_eq!(combo.total_price_in_cents, 13_000);
        assert_eq!(combo.listing_ids(), vec!["a", "b"]);

        let empty = Combination::new(vec![]);
        assert_eq!(empty.total_price_in_cents, 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_catalog_grouping_preserves_order() {
        let catalog = StorageCatalog::from_listings(vec![
            Listing::new("a", 50.0, 20.0, "east", 5_000),
            Listing::new("b", 30.0, 10.0, "west", 8_000),
            Listing::new("c", 40.0, 10.0, "east", 3_000),
        ]);

        let order: Vec<&str> = catalog
            .locations()
            .map(|group| group.location_id.as_str())
            .collect();
        assert_eq!(order, vec!["east", "west"]);

        let east = catalog.listings_for("east").unwrap();
        assert_eq!(east[0].id, "a");
        assert_eq!(east[1].id, "c");
        assert!(catalog.listings_for("north").is_none());
    }
}
