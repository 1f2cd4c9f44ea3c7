// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the taxi and listing collections.

pub mod listing;
pub mod ride;
pub mod stats;

pub use listing::{Listing, ListingMatch, NearbyListing, NearbyQuery};
pub use ride::{Ride, RideFare};
pub use stats::{GroupAveragePrice, HourlyFareStats};
