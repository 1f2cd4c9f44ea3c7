// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use mongodb::bson::doc;
use mongodb::{Client, Database, IndexModel};
use rideshare_queries::config::Config;
use rideshare_queries::db::{collections, MongoDb};
use rideshare_queries::models::{Listing, Ride};

/// Connection string for a disposable test server, if one is configured.
#[allow(dead_code)]
pub fn mongo_uri() -> Option<String> {
    std::env::var("MONGODB_TEST_URI").ok()
}

/// Skip test with message if no test server is configured.
#[macro_export]
macro_rules! require_mongo {
    () => {
        if crate::common::mongo_uri().is_none() {
            eprintln!("⚠️  Skipping: MONGODB_TEST_URI not set");
            return;
        }
    };
}

/// A freshly named database; drop it with `cleanup`.
#[allow(dead_code)]
pub struct TestDb {
    pub raw: Database,
    pub db: MongoDb,
}

#[allow(dead_code)]
impl TestDb {
    pub async fn cleanup(self) {
        self.raw.drop().await.expect("Failed to drop test database");
    }
}

/// Create an isolated test database on the configured server.
#[allow(dead_code)]
pub async fn test_db() -> TestDb {
    use std::time::{SystemTime, UNIX_EPOCH};

    let uri = mongo_uri().expect("MONGODB_TEST_URI not set");
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let name = format!("rq_test_{}", nanos);

    let config = Config::new(uri.clone(), name.clone()).unwrap();
    let db = MongoDb::connect(&config)
        .await
        .expect("Failed to create client");

    let client = Client::with_uri_str(&uri)
        .await
        .expect("Failed to connect to test server");

    TestDb {
        raw: client.database(&name),
        db,
    }
}

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> MongoDb {
    MongoDb::new_mock()
}

#[allow(dead_code)]
pub async fn seed_rides(raw: &Database, rides: &[Ride]) {
    raw.collection::<Ride>(collections::TAXI)
        .insert_many(rides)
        .await
        .expect("Failed to seed rides");
}

#[allow(dead_code)]
pub async fn seed_listings(raw: &Database, listings: &[Listing]) {
    raw.collection::<Listing>(collections::LISTING)
        .insert_many(listings)
        .await
        .expect("Failed to seed listings");
}

#[allow(dead_code)]
pub async fn create_text_index(raw: &Database) {
    raw.collection::<Listing>(collections::LISTING)
        .create_index(IndexModel::builder().keys(doc! { "name": "text" }).build())
        .await
        .expect("Failed to create text index");
}

#[allow(dead_code)]
pub async fn create_geo_index(raw: &Database) {
    raw.collection::<Listing>(collections::LISTING)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "location": "2dsphere" })
                .build(),
        )
        .await
        .expect("Failed to create 2dsphere index");
}
