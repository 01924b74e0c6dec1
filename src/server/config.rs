use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_COCKTAIL_API_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1/";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const COCKTAIL_SEARCH_PATH: &str = "search.php";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Base URL of the cocktail API, always ending in `/`.
    pub cocktail_api_url: Url,
    /// `search.php` resolved against `cocktail_api_url`.
    pub cocktail_search_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let cocktail_api_url = std::env::var("COCKTAIL_API_URL")
            .unwrap_or_else(|_| DEFAULT_COCKTAIL_API_URL.to_string());

        Self::new(database_url, bind_address, &cocktail_api_url)
    }

    /// Builds a configuration from raw values, validating the cocktail API URL.
    ///
    /// # Returns
    /// - `Ok(Config)` - Valid configuration
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - The cocktail API URL cannot be parsed
    ///   or cannot serve as a base URL
    pub fn new(
        database_url: String,
        bind_address: String,
        cocktail_api_url: &str,
    ) -> Result<Self, AppError> {
        let invalid = |reason: String| ConfigError::InvalidEnvVar {
            name: "COCKTAIL_API_URL".to_string(),
            reason,
        };

        let mut base = Url::parse(cocktail_api_url).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_string()).into());
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let cocktail_search_url = base
            .join(COCKTAIL_SEARCH_PATH)
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            database_url,
            bind_address,
            cocktail_api_url: base,
            cocktail_search_url,
        })
    }
}
