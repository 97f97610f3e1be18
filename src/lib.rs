//! Vehicle Storage Quoting Service
//!
//! Answers: given a set of vehicles needing storage and a catalog of storage
//! listings grouped by location, what is the cheapest subset of listings at
//! each location that can physically hold all vehicles, and which location
//! is cheapest overall?
//!
//! # Domain Model
//!
//! - [`Listing`](domain::Listing): Storage lot with row-based capacity
//! - [`Vehicle`](domain::Vehicle): Unit-width item to store
//! - [`Combination`](domain::Combination): Listing subset with derived price
//! - [`StorageCatalog`](domain::StorageCatalog): Listings grouped by location
//!
//! # Engine
//!
//! - [`generate_combinations`](solver::generate_combinations): Power set per location
//! - [`can_fit`](solver::can_fit): Greedy row-packing feasibility heuristic
//! - [`CombinationIndex`](solver::CombinationIndex): Precomputed cheapest-first tables

pub mod api;
pub mod console;
pub mod demo_data;
pub mod domain;
pub mod dto;
pub mod loader;
pub mod solver;
