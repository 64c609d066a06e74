use serde::Serialize;

use crate::error::Result;
use crate::lookup::{FoodDatabase, FoodLookupClient, LookupError};
use crate::models::{FoodEntry, NutrientVector};

/// One logged entry together with the nutrients counted for it.
#[derive(Debug, Clone, Serialize)]
pub struct EntryBreakdown {
    pub entry: FoodEntry,
    pub nutrients: NutrientVector,

    /// Set when the lookup failed and the entry was counted as zero.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "display_error")]
    pub lookup_error: Option<LookupError>,
}

fn display_error<S: serde::Serializer>(
    error: &Option<LookupError>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match error {
        Some(err) => serializer.serialize_str(&err.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Owns the food entries logged during one session.
///
/// Entries are append-only and kept in insertion order.
#[derive(Debug, Default)]
pub struct NutritionAggregator {
    entries: Vec<FoodEntry>,
}

impl NutritionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; returns the new entry count.
    pub fn add_entry(&mut self, food: &str, grams: f64) -> Result<usize> {
        let entry = FoodEntry::new(food, grams)?;
        Ok(self.push(entry))
    }

    /// Append an already-validated entry; returns the new entry count.
    pub fn push(&mut self, entry: FoodEntry) -> usize {
        tracing::debug!(food = entry.name(), grams = entry.grams(), "food entry added");
        self.entries.push(entry);
        self.entries.len()
    }

    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Resolve every entry in insertion order and sum the results.
    ///
    /// A failed lookup contributes the zero vector; the failure is kept in
    /// the breakdown row.
    pub fn compute_totals<D: FoodDatabase>(
        &self,
        client: &FoodLookupClient<D>,
    ) -> (NutrientVector, Vec<EntryBreakdown>) {
        let mut totals = NutrientVector::zero();
        let mut breakdown = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            let (nutrients, lookup_error) = client.resolve_or_zero(entry.name(), entry.grams());

            totals += nutrients;
            breakdown.push(EntryBreakdown {
                entry: entry.clone(),
                nutrients,
                lookup_error,
            });
        }

        (totals, breakdown)
    }
}
