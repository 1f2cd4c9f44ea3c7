// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filter, projection and aggregation documents for each query.
//!
//! Kept free of I/O so the exact document sent to the server can be
//! inspected in tests.

use geo::Point;
use mongodb::bson::{doc, Document};

/// Field the `$geoNear` stage writes the computed distance into.
pub const DISTANCE_FIELD: &str = "distance";

// ─── Rides ───────────────────────────────────────────────────

/// Rides with `min_fare <= fare_amount <= max_fare`.
pub fn fare_range_filter(min_fare: f64, max_fare: f64) -> Document {
    doc! {
        "fare_amount": { "$gte": min_fare, "$lte": max_fare },
    }
}

pub fn fare_range_projection() -> Document {
    doc! {
        "_id": 0,
        "pickup_longitude": 1,
        "pickup_latitude": 1,
        "fare_amount": 1,
    }
}

/// Manhattan distance between pickup and dropoff, as an aggregation expression.
fn manhattan_distance_expr() -> Document {
    doc! {
        "$add": [
            { "$abs": { "$subtract": ["$pickup_longitude", "$dropoff_longitude"] } },
            { "$abs": { "$subtract": ["$pickup_latitude", "$dropoff_latitude"] } },
        ]
    }
}

/// Per pickup hour: average fare, average Manhattan distance and ride count,
/// highest average fare first.
pub fn hourly_fare_stats_pipeline() -> Vec<Document> {
    vec![
        doc! {
            "$group": {
                "_id": { "$hour": "$pickup_datetime" },
                "avgFare": { "$avg": "$fare_amount" },
                "avgDist": { "$avg": manhattan_distance_expr() },
                "rideCount": { "$sum": 1 },
            }
        },
        doc! { "$sort": { "avgFare": -1 } },
        doc! {
            "$project": {
                "_id": 0,
                "hour": "$_id",
                "avgFare": 1,
                "avgDist": 1,
                "rideCount": 1,
            }
        },
    ]
}

// ─── Listings ────────────────────────────────────────────────

/// Listings matching a full-text search with at least `min_reviews` reviews.
pub fn text_search_filter(text: &str, min_reviews: i64) -> Document {
    doc! {
        "$text": { "$search": text },
        "number_of_reviews": { "$gte": min_reviews },
    }
}

pub fn text_search_projection() -> Document {
    doc! {
        "_id": 0,
        "name": 1,
        "number_of_reviews": 1,
        "neighbourhood": 1,
        "price": 1,
        "location": 1,
    }
}

/// Average price per neighbourhood group, most expensive first.
pub fn average_price_per_group_pipeline() -> Vec<Document> {
    vec![
        doc! {
            "$group": {
                "_id": "$neighbourhood_group",
                "averagePrice": { "$avg": "$price" },
            }
        },
        doc! { "$sort": { "averagePrice": -1 } },
        doc! {
            "$project": {
                "_id": 0,
                "group": "$_id",
                "averagePrice": 1,
            }
        },
    ]
}

/// Listings within `radius_meters` of `origin`, nearest first.
///
/// `$geoNear` must be the first stage and needs a `2dsphere` index on
/// `location`.
pub fn nearby_listings_pipeline(origin: Point<f64>, radius_meters: f64) -> Vec<Document> {
    vec![
        doc! {
            "$geoNear": {
                "near": { "type": "Point", "coordinates": [origin.x(), origin.y()] },
                "key": "location",
                "distanceField": DISTANCE_FIELD,
                "maxDistance": radius_meters,
                "spherical": true,
            }
        },
        doc! {
            "$project": {
                "_id": 0,
                DISTANCE_FIELD: 1,
                "location": 1,
                "name": 1,
                "neighbourhood": 1,
                "neighbourhood_group": 1,
                "price": 1,
                "room_type": 1,
            }
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    fn stage_names(pipeline: &[Document]) -> Vec<&str> {
        pipeline
            .iter()
            .map(|stage| stage.keys().next().map(String::as_str).unwrap_or(""))
            .collect()
    }

    #[test]
    fn test_fare_range_filter_is_inclusive() {
        let filter = fare_range_filter(4.0, 15.0);
        let range = filter.get_document("fare_amount").unwrap();
        assert_eq!(range.get_f64("$gte").unwrap(), 4.0);
        assert_eq!(range.get_f64("$lte").unwrap(), 15.0);
    }

    #[test]
    fn test_projections_exclude_id() {
        for projection in [fare_range_projection(), text_search_projection()] {
            assert_eq!(projection.get("_id"), Some(&Bson::Int32(0)));
        }
    }

    #[test]
    fn test_text_search_filter() {
        let filter = text_search_filter("cozy", 10);
        assert_eq!(
            filter.get_document("$text").unwrap().get_str("$search").unwrap(),
            "cozy"
        );
        assert_eq!(
            filter
                .get_document("number_of_reviews")
                .unwrap()
                .get_i64("$gte")
                .unwrap(),
            10
        );
    }

    #[test]
    fn test_average_price_sorted_descending() {
        let pipeline = average_price_per_group_pipeline();
        assert_eq!(stage_names(&pipeline), ["$group", "$sort", "$project"]);

        let group = pipeline[0].get_document("$group").unwrap();
        assert_eq!(group.get_str("_id").unwrap(), "$neighbourhood_group");
        assert_eq!(
            group
                .get_document("averagePrice")
                .unwrap()
                .get_str("$avg")
                .unwrap(),
            "$price"
        );

        let sort = pipeline[1].get_document("$sort").unwrap();
        assert_eq!(sort.get_i32("averagePrice").unwrap(), -1);
    }

    #[test]
    fn test_hourly_stats_uses_accumulators_only() {
        let pipeline = hourly_fare_stats_pipeline();
        assert_eq!(stage_names(&pipeline), ["$group", "$sort", "$project"]);

        // Every non-_id field of $group must be an accumulator; a bare $add is
        // rejected by the server.
        let group = pipeline[0].get_document("$group").unwrap();
        for (field, value) in group.iter().filter(|(k, _)| k.as_str() != "_id") {
            let op = value.as_document().unwrap().keys().next().unwrap();
            assert!(
                ["$avg", "$sum"].contains(&op.as_str()),
                "{} uses non-accumulator {}",
                field,
                op
            );
        }

        let dist = group.get_document("avgDist").unwrap().get_document("$avg").unwrap();
        assert_eq!(dist.get_array("$add").unwrap().len(), 2);

        assert_eq!(
            group.get_document("_id").unwrap().get_str("$hour").unwrap(),
            "$pickup_datetime"
        );
        assert_eq!(
            pipeline[1].get_document("$sort").unwrap().get_i32("avgFare").unwrap(),
            -1
        );
    }

    #[test]
    fn test_nearby_pipeline_starts_with_geo_near() {
        let pipeline = nearby_listings_pipeline(Point::new(-73.98, 40.75), 1000.0);
        assert_eq!(stage_names(&pipeline), ["$geoNear", "$project"]);

        let geo_near = pipeline[0].get_document("$geoNear").unwrap();
        assert_eq!(geo_near.get_f64("maxDistance").unwrap(), 1000.0);
        assert!(geo_near.get_bool("spherical").unwrap());
        assert_eq!(geo_near.get_str("distanceField").unwrap(), DISTANCE_FIELD);

        let near = geo_near.get_document("near").unwrap();
        let coords = near.get_array("coordinates").unwrap();
        assert_eq!(coords[0].as_f64(), Some(-73.98));
        assert_eq!(coords[1].as_f64(), Some(40.75));

        let projection = pipeline[1].get_document("$project").unwrap();
        for field in [
            "distance",
            "location",
            "name",
            "neighbourhood",
            "neighbourhood_group",
            "price",
            "room_type",
        ] {
            assert!(projection.contains_key(field), "missing {}", field);
        }
    }
}
