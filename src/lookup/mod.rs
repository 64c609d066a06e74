mod client;
pub mod openfoodfacts;

use thiserror::Error;

use crate::models::NutrientVector;

pub use client::FoodLookupClient;
pub use openfoodfacts::{LookupConfig, OpenFoodFacts};

/// Why a food could not be resolved.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("no product matched '{0}'")]
    NoMatch(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::Malformed(err.to_string())
        } else {
            LookupError::Transport(err.to_string())
        }
    }
}

/// A searchable source of per-100g nutrient profiles.
pub trait FoodDatabase {
    /// Product code of the first search hit, if any.
    fn first_match(&self, query: &str) -> Result<Option<String>, LookupError>;

    /// Nutrient profile per 100g for a product code.
    fn nutrients_per_100g(&self, code: &str) -> Result<NutrientVector, LookupError>;
}

impl<D: FoodDatabase + ?Sized> FoodDatabase for &D {
    fn first_match(&self, query: &str) -> Result<Option<String>, LookupError> {
        (**self).first_match(query)
    }

    fn nutrients_per_100g(&self, code: &str) -> Result<NutrientVector, LookupError> {
        (**self).nutrients_per_100g(code)
    }
}
