use crate::models::{BalanceResult, Classification, EnergyResult, NutrientVector};

/// Combine intake and expenditure into a signed delta and its classification.
pub fn analyze(totals: NutrientVector, energy: EnergyResult) -> BalanceResult {
    let delta = totals.calories - energy.calories_burned;
    BalanceResult {
        totals,
        energy,
        delta,
        classification: Classification::from_delta(delta),
    }
}
