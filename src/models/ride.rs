// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Taxi ride model.

use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

/// Full ride document as stored in the `taxi` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ride {
    /// Source record key (pickup timestamp plus a sequence suffix)
    #[serde(default)]
    pub key: String,
    /// Fare in dollars
    pub fare_amount: f64,
    /// Pickup time, stored as a BSON date
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub pickup_datetime: DateTime<Utc>,
    pub pickup_longitude: f64,
    pub pickup_latitude: f64,
    pub dropoff_longitude: f64,
    pub dropoff_latitude: f64,
    pub passenger_count: i32,
}

impl Ride {
    /// Manhattan distance between pickup and dropoff, in degrees.
    pub fn manhattan_distance(&self) -> f64 {
        (self.pickup_longitude - self.dropoff_longitude).abs()
            + (self.pickup_latitude - self.dropoff_latitude).abs()
    }
}

/// Fare range projection of a ride.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideFare {
    pub pickup_longitude: f64,
    pub pickup_latitude: f64,
    pub fare_amount: f64,
}
