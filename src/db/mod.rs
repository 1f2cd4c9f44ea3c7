//! Database layer (MongoDB).

pub mod mongo;
pub mod pipelines;

pub use mongo::MongoDb;

/// Collection names as constants.
pub mod collections {
    /// Taxi rides
    pub const TAXI: &str = "taxi";
    /// Short-term rental listings
    pub const LISTING: &str = "listing";
}
