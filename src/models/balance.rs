use std::fmt;

use serde::Serialize;

use crate::models::NutrientVector;

/// Energy expenditure for the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyResult {
    /// Calories burned walking.
    pub calories_burned: f64,

    /// Basal metabolic rate, kcal per day.
    pub bmr: f64,
}

/// Direction of the caloric delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    Surplus,
    Deficit,
    Maintenance,
}

impl Classification {
    /// Classify an intake-minus-burned delta. Only an exact zero is maintenance.
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Classification::Surplus
        } else if delta < 0.0 {
            Classification::Deficit
        } else {
            Classification::Maintenance
        }
    }

    /// Advisory text shown alongside the numbers.
    pub fn advice(self) -> &'static str {
        match self {
            Classification::Surplus => {
                "You have consumed more calories than you burned, which may result in a \
                 caloric surplus. This is ideal for gaining weight or muscle, assuming \
                 balanced macronutrient intake. Consider balancing with additional activity \
                 if you aim for a caloric deficit."
            }
            Classification::Deficit => {
                "You are in a caloric deficit, which may lead to weight loss. If this is your \
                 goal, ensure protein intake remains sufficient to preserve muscle mass."
            }
            Classification::Maintenance => {
                "Your caloric intake matches your calories burned, promoting weight \
                 maintenance. For muscle growth or other fitness goals, you might adjust \
                 macronutrient intake."
            }
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Classification::Surplus => "surplus",
            Classification::Deficit => "deficit",
            Classification::Maintenance => "maintenance",
        };
        f.write_str(name)
    }
}

/// Totals, expenditure and the derived caloric delta.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceResult {
    pub totals: NutrientVector,
    pub energy: EnergyResult,

    /// `totals.calories - energy.calories_burned`
    pub delta: f64,

    pub classification: Classification,
}
