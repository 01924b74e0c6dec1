//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! the request handlers. The state is initialized once during startup and then cloned
//! for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use url::Url;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for cocktail API requests.
    ///
    /// Configured without redirects; see `startup::setup_reqwest_client`.
    pub http_client: reqwest::Client,

    /// Full URL of the cocktail search endpoint.
    pub cocktail_search_url: Url,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `cocktail_search_url` - URL of the cocktail search endpoint
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, cocktail_search_url: Url) -> Self {
        Self {
            db,
            http_client,
            cocktail_search_url,
        }
    }
}
