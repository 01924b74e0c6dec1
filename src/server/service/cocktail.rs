//! Cocktail service computing saturation levels for drinks from the cocktail API.
//!
//! Each drink returned by the search is treated as a single serving consumed by a patron
//! with the default body mass, with no elapsed time.

use axum::http::StatusCode;
use url::Url;

use crate::server::{
    error::{upstream::UpstreamError, AppError},
    model::{cocktail::CocktailSearchResponse, patron::PATRON_DEFAULTS},
    service::saturation::calculate_saturation_level,
};

/// Service for querying the third-party cocktail search endpoint.
pub struct CocktailService<'a> {
    /// HTTP client for cocktail API requests.
    http_client: &'a reqwest::Client,
    /// Full URL of the `search.php` endpoint.
    search_url: &'a Url,
}

impl<'a> CocktailService<'a> {
    /// Creates a new CocktailService instance.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `search_url` - URL of the cocktail search endpoint
    pub fn new(http_client: &'a reqwest::Client, search_url: &'a Url) -> Self {
        Self {
            http_client,
            search_url,
        }
    }

    /// Searches cocktails by name and returns one saturation level per match.
    ///
    /// No timeout or retry is applied to the upstream request. An empty or `null`
    /// drink list yields an empty result.
    ///
    /// # Arguments
    /// - `name` - Cocktail name passed as the `s` query parameter
    ///
    /// # Returns
    /// - `Ok(Vec<f64>)` - Saturation levels in upstream order
    /// - `Err(AppError::UpstreamErr(Status))` - The API answered with a status other than 200
    /// - `Err(AppError::UpstreamErr(Transport))` - The request failed or the body was not JSON
    /// - `Err(AppError::UpstreamErr(MalformedField))` - A drink has a missing or non-numeric
    ///   `strMeasure1` or `strABV`
    pub async fn saturation_levels(&self, name: &str) -> Result<Vec<f64>, AppError> {
        let response = self
            .http_client
            .get(self.search_url.clone())
            .query(&[("s", name)])
            .send()
            .await
            .map_err(UpstreamError::from)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(UpstreamError::Status(status).into());
        }

        let body = response
            .json::<CocktailSearchResponse>()
            .await
            .map_err(UpstreamError::from)?;

        let body_mass = f64::from(PATRON_DEFAULTS.body_mass);
        let levels = body
            .drinks
            .unwrap_or_default()
            .iter()
            .map(|drink| {
                let alcohol_consumed = drink.alcohol_content()?;
                Ok(calculate_saturation_level(alcohol_consumed, body_mass, 0.0))
            })
            .collect::<Result<Vec<f64>, UpstreamError>>()?;

        tracing::debug!("Cocktail search '{}' matched {} drinks", name, levels.len());

        Ok(levels)
    }
}
