// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types for the query layer.

use mongodb::error::ErrorKind;

/// Server error codes that mean the filter or pipeline itself was rejected.
///
/// Missing text/geo indexes are included: the query cannot be planned
/// as written.
const QUERY_SYNTAX_CODES: &[i32] = &[
    2,     // BadValue
    9,     // FailedToParse
    14,    // TypeMismatch
    27,    // IndexNotFound ($text without a text index)
    168,   // InvalidPipelineOperator
    291,   // NoQueryExecutionPlans ($geoNear without a geo index)
    15952, // unknown group operator
    15955, // a group specification must include an _id
    16410, // field path references must be prefixed with a '$'
    17276, // unknown top level operator
    40323, // a pipeline stage specification object must contain exactly one field
    40324, // unrecognized pipeline stage name
];

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Store unreachable: {0}")]
    Connectivity(String),

    #[error("Query rejected by server: {0}")]
    QuerySyntax(String),

    #[error("Invalid query parameters: {0}")]
    InvalidQuery(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Classify a driver error.
    pub fn from_driver(err: mongodb::error::Error) -> Self {
        let classified = match &*err.kind {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::ConnectionPoolCleared { .. } => AppError::Connectivity(err.to_string()),
            ErrorKind::Command(cmd) if QUERY_SYNTAX_CODES.contains(&cmd.code) => {
                let detail = format!("{} ({}): {}", cmd.code_name, cmd.code, cmd.message);
                AppError::QuerySyntax(detail)
            }
            _ => AppError::Database(err.to_string()),
        };

        match &classified {
            AppError::Connectivity(_) | AppError::QuerySyntax(_) => {
                tracing::warn!(error = %classified, "Query failed")
            }
            _ => tracing::error!(error = %classified, "Database error"),
        }
        classified
    }

    /// Whether the store could not be reached at all.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, AppError::Connectivity(_))
    }

    /// Whether the server refused the query document.
    pub fn is_query_syntax(&self) -> bool {
        matches!(self, AppError::QuerySyntax(_))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::from_driver(err)
    }
}

impl From<mongodb::bson::de::Error> for AppError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        AppError::Database(format!("Failed to decode result row: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidQuery(err.to_string())
    }
}

/// Result type alias for query operations
pub type Result<T> = std::result::Result<T, AppError>;
