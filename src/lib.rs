// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Rideshare-Queries: read-only reports over taxi rides and rental listings
//!
//! This crate provides typed query operations against a MongoDB database
//! holding a `taxi` and a `listing` collection. All filtering, grouping and
//! distance computation runs server-side.

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use config::Config;
pub use db::MongoDb;
pub use error::{AppError, Result};
