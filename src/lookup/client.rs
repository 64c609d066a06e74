use crate::lookup::{FoodDatabase, LookupError};
use crate::models::NutrientVector;

/// Resolves a food name and portion into a nutrient vector.
///
/// Every call is independent: no caching, no retries.
pub struct FoodLookupClient<D> {
    database: D,
}

impl<D: FoodDatabase> FoodLookupClient<D> {
    pub fn new(database: D) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &D {
        &self.database
    }

    /// Look up `food` and scale its per-100g profile to `grams`.
    pub fn try_resolve(&self, food: &str, grams: f64) -> Result<NutrientVector, LookupError> {
        let query = food.trim();
        let code = self
            .database
            .first_match(query)?
            .ok_or_else(|| LookupError::NoMatch(query.to_string()))?;

        tracing::debug!(food = query, code = %code, "resolved food to product");

        let per_100g = self.database.nutrients_per_100g(&code)?;
        Ok(per_100g.scaled(grams / 100.0))
    }

    /// Resolve, counting a failed lookup as the zero vector.
    ///
    /// The failure is handed back alongside so callers can report it.
    pub fn resolve_or_zero(&self, food: &str, grams: f64) -> (NutrientVector, Option<LookupError>) {
        match self.try_resolve(food, grams) {
            Ok(nutrients) => (nutrients, None),
            Err(err) => {
                tracing::warn!(food, error = %err, "food lookup failed, counting as zero");
                (NutrientVector::zero(), Some(err))
            }
        }
    }

    /// Like [`resolve_or_zero`](Self::resolve_or_zero), without the failure.
    pub fn resolve(&self, food: &str, grams: f64) -> NutrientVector {
        self.resolve_or_zero(food, grams).0
    }
}
