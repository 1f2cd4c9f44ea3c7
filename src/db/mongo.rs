// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! MongoDB client wrapper with typed read-only queries.
//!
//! Provides:
//! - Rides (fare range, hourly fare statistics)
//! - Listings (text search, average price per group, proximity search)

use crate::config::Config;
use crate::db::{collections, pipelines};
use crate::error::{AppError, Result};
use crate::models::{
    GroupAveragePrice, HourlyFareStats, ListingMatch, NearbyListing, NearbyQuery, RideFare,
};
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use serde::de::DeserializeOwned;
use validator::Validate;

const APP_NAME: &str = "rideshare-queries";

/// MongoDB query client.
///
/// Cheap to clone; clones share the driver's connection pool.
#[derive(Clone)]
pub struct MongoDb {
    db: Option<Database>,
}

impl MongoDb {
    /// Create a client for the configured database.
    ///
    /// The driver connects lazily, so an unreachable server surfaces as
    /// [`AppError::Connectivity`] on the first query, not here.
    pub async fn connect(config: &Config) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.mongodb_uri)
            .await
            .map_err(AppError::from_driver)?;
        options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(options).map_err(AppError::from_driver)?;

        tracing::info!(database = %config.database, "MongoDB client created");

        Ok(Self::from_database(client.database(&config.database)))
    }

    /// Wrap an existing database handle.
    pub fn from_database(db: Database) -> Self {
        Self { db: Some(db) }
    }

    /// Create a mock client for testing (offline mode).
    ///
    /// All operations return [`AppError::Connectivity`].
    pub fn new_mock() -> Self {
        Self { db: None }
    }

    /// Helper to get the database or return an error if offline.
    fn get_db(&self) -> Result<&Database> {
        self.db.as_ref().ok_or_else(|| {
            AppError::Connectivity("Database not connected (offline mode)".to_string())
        })
    }

    fn collection<T: Send + Sync>(&self, name: &str) -> Result<Collection<T>> {
        Ok(self.get_db()?.collection::<T>(name))
    }

    /// Round-trip a `ping` to verify the server is reachable.
    pub async fn ping(&self) -> Result<()> {
        self.get_db()?.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Run a pipeline and decode every row.
    async fn aggregate<T: DeserializeOwned>(
        &self,
        collection: &str,
        pipeline: Vec<Document>,
    ) -> Result<Vec<T>> {
        tracing::debug!(collection, pipeline = ?pipeline, "Running aggregation");

        let rows: Vec<Document> = self
            .collection::<Document>(collection)?
            .aggregate(pipeline)
            .await?
            .try_collect()
            .await?;

        let decoded = rows
            .into_iter()
            .map(bson::from_document)
            .collect::<std::result::Result<Vec<T>, _>>()?;

        tracing::info!(collection, count = decoded.len(), "Aggregation complete");
        Ok(decoded)
    }

    // ─── Ride Queries ────────────────────────────────────────────

    /// Rides with `min_fare <= fare_amount <= max_fare`.
    ///
    /// `min_fare > max_fare` is not an error; nothing matches.
    pub async fn fare_range(&self, min_fare: f64, max_fare: f64) -> Result<Vec<RideFare>> {
        let filter = pipelines::fare_range_filter(min_fare, max_fare);
        tracing::debug!(filter = ?filter, "Running fare range query");

        let rides: Vec<RideFare> = self
            .collection::<RideFare>(collections::TAXI)?
            .find(filter)
            .projection(pipelines::fare_range_projection())
            .await?
            .try_collect()
            .await?;

        tracing::info!(
            min_fare,
            max_fare,
            count = rides.len(),
            "Fare range query complete"
        );
        Ok(rides)
    }

    /// Average fare, average Manhattan distance and ride count per pickup hour,
    /// highest average fare first.
    pub async fn hourly_fare_stats(&self) -> Result<Vec<HourlyFareStats>> {
        self.aggregate(collections::TAXI, pipelines::hourly_fare_stats_pipeline())
            .await
    }

    // ─── Listing Queries ─────────────────────────────────────────

    /// Listings matching `text` with at least `min_reviews` reviews.
    ///
    /// Needs a text index on the listing collection; without one the server
    /// rejects the query with [`AppError::QuerySyntax`].
    pub async fn text_search(&self, text: &str, min_reviews: i64) -> Result<Vec<ListingMatch>> {
        let filter = pipelines::text_search_filter(text, min_reviews);
        tracing::debug!(filter = ?filter, "Running text search");

        let listings: Vec<ListingMatch> = self
            .collection::<ListingMatch>(collections::LISTING)?
            .find(filter)
            .projection(pipelines::text_search_projection())
            .await?
            .try_collect()
            .await?;

        tracing::info!(
            text,
            min_reviews,
            count = listings.len(),
            "Text search complete"
        );
        Ok(listings)
    }

    /// Average price per neighbourhood group, most expensive first.
    pub async fn average_price_per_group(&self) -> Result<Vec<GroupAveragePrice>> {
        self.aggregate(
            collections::LISTING,
            pipelines::average_price_per_group_pipeline(),
        )
        .await
    }

    /// Listings within `query.radius_meters` of the origin, nearest first,
    /// each annotated with its distance in meters.
    ///
    /// Needs a `2dsphere` index on `location`.
    pub async fn nearby_listings(&self, query: &NearbyQuery) -> Result<Vec<NearbyListing>> {
        query.validate()?;

        self.aggregate(
            collections::LISTING,
            pipelines::nearby_listings_pipeline(query.origin(), query.radius_meters),
        )
        .await
    }
}
