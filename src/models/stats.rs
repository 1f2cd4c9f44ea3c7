//! Aggregate rows produced by the grouping pipelines.

use serde::{Deserialize, Serialize};

/// Average listing price for one neighbourhood group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAveragePrice {
    /// Neighbourhood group (null when listings lack the field)
    pub group: Option<String>,
    /// `None` when no listing in the group has a numeric price
    #[serde(rename = "averagePrice")]
    pub average_price: Option<f64>,
}

/// Fare statistics for rides picked up within one hour of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyFareStats {
    /// Pickup hour, 0-23 (UTC); `None` groups rides without a pickup date
    pub hour: Option<i32>,
    #[serde(rename = "avgFare")]
    pub average_fare: Option<f64>,
    /// Mean Manhattan distance in degrees
    #[serde(rename = "avgDist")]
    pub average_distance: Option<f64>,
    #[serde(rename = "rideCount")]
    pub ride_count: i64,
}
