mod aggregator;
mod analyzer;
mod report;

pub use aggregator::{EntryBreakdown, NutritionAggregator};
pub use analyzer::analyze;
pub use report::{BalanceReport, MacroShare, CHART_NUTRIENTS};

use crate::energy::compute_energy;
use crate::error::Result;
use crate::lookup::{FoodDatabase, FoodLookupClient};
use crate::models::{FoodEntry, ProfileInput};

/// One user's session: the logged foods plus the client used to resolve them.
///
/// This is the boundary a presentation layer talks to.
pub struct Session<D> {
    aggregator: NutritionAggregator,
    client: FoodLookupClient<D>,
}

impl<D: FoodDatabase> Session<D> {
    pub fn new(database: D) -> Self {
        Self {
            aggregator: NutritionAggregator::new(),
            client: FoodLookupClient::new(database),
        }
    }

    /// Log a food; returns the updated entry count.
    pub fn add_food(&mut self, food: &str, grams: f64) -> Result<usize> {
        self.aggregator.add_entry(food, grams)
    }

    /// Log a food from raw text fields; returns the updated entry count.
    pub fn add_food_raw(&mut self, food: &str, grams: &str) -> Result<usize> {
        let entry = FoodEntry::from_raw(food, grams)?;
        Ok(self.aggregator.push(entry))
    }

    pub fn entry_count(&self) -> usize {
        self.aggregator.entry_count()
    }

    pub fn entries(&self) -> &[FoodEntry] {
        self.aggregator.entries()
    }

    /// Validate the profile, resolve every entry, and analyze the balance.
    ///
    /// Invalid input aborts before any lookup is made.
    pub fn calculate(&self, input: &ProfileInput) -> Result<BalanceReport> {
        let (profile, walk) = input.parse()?;

        tracing::info!(entries = self.entry_count(), "computing totals");
        let (totals, breakdown) = self.aggregator.compute_totals(&self.client);
        let energy = compute_energy(&profile, &walk);

        Ok(BalanceReport {
            result: analyze(totals, energy),
            breakdown,
        })
    }
}
