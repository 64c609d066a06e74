use std::time::Instant;

use reqwest::blocking::Client;
use serde::{Deserialize, Deserializer};

use crate::error::Result;
use crate::lookup::{FoodDatabase, LookupError};
use crate::models::NutrientVector;

/// Public Open Food Facts instance.
pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";

/// Open Food Facts asks API clients to identify themselves.
pub const DEFAULT_USER_AGENT: &str = concat!("energy_balance/", env!("CARGO_PKG_VERSION"));

/// Connection settings for the food database.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Blocking Open Food Facts client.
pub struct OpenFoodFacts {
    client: Client,
    base_url: String,
}

impl OpenFoodFacts {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl FoodDatabase for OpenFoodFacts {
    fn first_match(&self, query: &str) -> std::result::Result<Option<String>, LookupError> {
        let started = Instant::now();
        let response: SearchResponse = self
            .client
            .get(format!("{}/cgi/search.pl", self.base_url))
            .query(&[
                ("search_terms", query),
                ("search_simple", "1"),
                ("action", "process"),
                ("json", "1"),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        tracing::debug!(
            query,
            count = response.count,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "food search finished"
        );

        Ok(response.first_code())
    }

    fn nutrients_per_100g(&self, code: &str) -> std::result::Result<NutrientVector, LookupError> {
        let response: ProductResponse = self
            .client
            .get(format!("{}/api/v0/product/{}.json", self.base_url, code))
            .send()?
            .error_for_status()?
            .json()?;

        let product = response
            .product
            .ok_or_else(|| LookupError::Malformed(format!("product {} has no record", code)))?;

        Ok(product.nutriments.per_100g())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u64,

    #[serde(default)]
    pub products: Vec<SearchHit>,
}

impl SearchResponse {
    /// Code of the first hit; no ranking beyond the provider's own order.
    pub fn first_code(&self) -> Option<String> {
        if self.count == 0 {
            return None;
        }
        self.products
            .first()
            .and_then(|hit| hit.code.clone())
            .filter(|code| !code.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    #[serde(default)]
    pub product: Option<Product>,
}

#[derive(Debug, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub nutriments: Nutriments,
}

/// Per-100g nutrient fields as Open Food Facts names them.
#[derive(Debug, Default, Deserialize)]
pub struct Nutriments {
    #[serde(rename = "energy-kcal_100g", default, deserialize_with = "lenient_f64")]
    pub energy_kcal_100g: Option<f64>,

    #[serde(rename = "fat_100g", default, deserialize_with = "lenient_f64")]
    pub fat_100g: Option<f64>,

    #[serde(rename = "sodium_100g", default, deserialize_with = "lenient_f64")]
    pub sodium_100g: Option<f64>,

    #[serde(rename = "carbohydrates_100g", default, deserialize_with = "lenient_f64")]
    pub carbohydrates_100g: Option<f64>,

    #[serde(rename = "proteins_100g", default, deserialize_with = "lenient_f64")]
    pub proteins_100g: Option<f64>,
}

impl Nutriments {
    /// Map onto the canonical keys; absent fields are 0.
    pub fn per_100g(&self) -> NutrientVector {
        NutrientVector::new(
            self.energy_kcal_100g.unwrap_or(0.0),
            self.fat_100g.unwrap_or(0.0),
            self.sodium_100g.unwrap_or(0.0),
            self.carbohydrates_100g.unwrap_or(0.0),
            self.proteins_100g.unwrap_or(0.0),
        )
    }
}

/// Accepts non-negative finite numbers and numeric strings; anything else becomes `None`.
fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let number = value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    });
    Ok(number.filter(|n| n.is_finite() && *n >= 0.0))
}

fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_f64(deserializer)?
        .filter(|n| *n > 0.0)
        .map(|n| n as u64)
        .unwrap_or(0))
}
