// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Short-term rental listing model and geometry handling.

use geo::Point;
use geojson::{Geometry, Value};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Full listing document as stored in the `listing` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub name: String,
    pub number_of_reviews: i64,
    pub neighbourhood: String,
    pub neighbourhood_group: String,
    /// Nightly price
    pub price: f64,
    /// GeoJSON point, `[longitude, latitude]`
    pub location: Geometry,
    /// Room type (e.g. "Entire home/apt", "Private room")
    pub room_type: String,
}

/// Text search projection of a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingMatch {
    pub name: String,
    pub number_of_reviews: i64,
    pub neighbourhood: String,
    pub price: f64,
    pub location: Geometry,
}

/// A listing annotated with its distance from a search origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyListing {
    /// Distance from the origin in meters
    pub distance: f64,
    pub location: Geometry,
    pub name: String,
    pub neighbourhood: String,
    pub neighbourhood_group: String,
    pub price: f64,
    pub room_type: String,
}

impl NearbyListing {
    /// The listing location as a point, if it is a GeoJSON point.
    pub fn point(&self) -> Option<Point<f64>> {
        geometry_point(&self.location)
    }
}

/// Parameters for a proximity search around a point.
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct NearbyQuery {
    #[validate(
        range(min = -180.0, max = 180.0),
        custom(function = "validate_finite")
    )]
    pub longitude: f64,
    #[validate(
        range(min = -90.0, max = 90.0),
        custom(function = "validate_finite")
    )]
    pub latitude: f64,
    /// Search radius in meters
    #[validate(
        range(min = 0.0),
        custom(function = "validate_finite")
    )]
    pub radius_meters: f64,
}

/// Range checks compare false against NaN, so reject non-finite values
/// explicitly.
fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}

impl NearbyQuery {
    pub fn new(origin: Point<f64>, radius_meters: f64) -> Self {
        Self {
            longitude: origin.x(),
            latitude: origin.y(),
            radius_meters,
        }
    }

    pub fn origin(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

/// Build a GeoJSON point geometry for a location.
pub fn point_geometry(point: Point<f64>) -> Geometry {
    Geometry::new(Value::from(&point))
}

/// Extract a point from a GeoJSON geometry.
pub fn geometry_point(geometry: &Geometry) -> Option<Point<f64>> {
    match &geometry.value {
        Value::Point(coords) if coords.len() >= 2 => Some(Point::new(coords[0], coords[1])),
        _ => None,
    }
}
