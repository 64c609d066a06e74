use serde::Serialize;

use crate::models::{BalanceResult, Nutrient, NutrientVector};
use crate::session::EntryBreakdown;

/// Nutrients shown in the macro proportion chart, in chart order.
pub const CHART_NUTRIENTS: [Nutrient; 3] = [Nutrient::Fats, Nutrient::Carbohydrates, Nutrient::Protein];

/// One slice of the macro proportion chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroShare {
    pub nutrient: &'static str,
    pub grams: f64,

    /// Share of the three macros combined, 0-100.
    pub percent: f64,
}

/// Everything a presentation layer needs after a totals computation.
#[derive(Debug, Clone, Serialize)]
pub struct BalanceReport {
    pub result: BalanceResult,
    pub breakdown: Vec<EntryBreakdown>,
}

impl BalanceReport {
    /// Per-entry nutrient lines, blank line between entries.
    pub fn breakdown_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for row in &self.breakdown {
            let mut header = format!("{} ({}g):", row.entry.name(), row.entry.grams());
            if let Some(err) = &row.lookup_error {
                header.push_str(&format!(" [lookup failed: {}]", err));
            }
            lines.push(header);
            lines.extend(nutrient_lines(&row.nutrients));
            lines.push(String::new());
        }
        lines
    }

    /// Totals, expenditure and delta lines.
    pub fn summary_lines(&self) -> Vec<String> {
        let result = &self.result;
        let mut lines = vec!["Total Nutritional Info:".to_string()];
        lines.extend(nutrient_lines(&result.totals));
        lines.push(String::new());
        lines.push(format!(
            "Calories Burned: {:.2} kcal",
            result.energy.calories_burned
        ));
        lines.push(format!("BMR: {:.2} kcal", result.energy.bmr));
        lines.push(format!(
            "Delta Calories (Food - Burned): {:.2} kcal",
            result.delta
        ));
        lines
    }

    pub fn advice(&self) -> &'static str {
        self.result.classification.advice()
    }

    /// Fats, carbohydrates and protein as grams and percentage shares.
    ///
    /// All shares are 0 when no macros were recorded.
    pub fn macro_proportions(&self) -> [MacroShare; 3] {
        let totals = &self.result.totals;
        let sum: f64 = CHART_NUTRIENTS.iter().map(|&n| totals.get(n)).sum();

        CHART_NUTRIENTS.map(|n| {
            let grams = totals.get(n);
            let percent = if sum > 0.0 { grams / sum * 100.0 } else { 0.0 };
            MacroShare {
                nutrient: n.label(),
                grams,
                percent,
            }
        })
    }

    /// Full text block: breakdown, summary, then advice.
    pub fn to_text(&self) -> String {
        let mut lines = vec!["Individual Food Items:".to_string(), String::new()];
        lines.extend(self.breakdown_lines());
        lines.extend(self.summary_lines());
        lines.push(String::new());
        lines.push(self.advice().to_string());
        lines.join("\n")
    }
}

fn nutrient_lines(v: &NutrientVector) -> Vec<String> {
    Nutrient::ALL
        .iter()
        .map(|&n| format!("  {}: {:.2} {}", n.label(), v.get(n), n.unit()))
        .collect()
}
