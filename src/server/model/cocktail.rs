//! Response models for the cocktail search API
//!
//! Only the fields needed to derive an alcohol quantity are decoded. Both numeric fields
//! arrive as free-form strings and may be absent or null.

use serde::Deserialize;

use crate::server::error::upstream::UpstreamError;

/// Body of `search.php?s={name}`. `drinks` is `null` when nothing matches.
#[derive(Debug, Deserialize)]
pub struct CocktailSearchResponse {
    #[serde(default)]
    pub drinks: Option<Vec<CocktailDrink>>,
}

#[derive(Debug, Deserialize)]
pub struct CocktailDrink {
    #[serde(rename = "strDrink", default)]
    pub name: Option<String>,
    #[serde(rename = "strMeasure1", default)]
    pub measure: Option<String>,
    #[serde(rename = "strABV", default)]
    pub abv: Option<String>,
}

impl CocktailDrink {
    /// Alcohol consumed for one serving: `measure * abv`.
    ///
    /// # Returns
    /// - `Ok(f64)` - Product of the two parsed fields
    /// - `Err(UpstreamError::MalformedField)` - Either field is missing or not a number
    pub fn alcohol_content(&self) -> Result<f64, UpstreamError> {
        let measure = self.parse_field("strMeasure1", self.measure.as_deref())?;
        let abv = self.parse_field("strABV", self.abv.as_deref())?;

        Ok(measure * abv)
    }

    fn parse_field(&self, field: &'static str, value: Option<&str>) -> Result<f64, UpstreamError> {
        value
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|parsed| parsed.is_finite())
            .ok_or_else(|| UpstreamError::MalformedField {
                drink: self.name.clone().unwrap_or_else(|| "unknown".to_string()),
                field,
                value: value.map(str::to_string),
            })
    }
}
