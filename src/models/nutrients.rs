use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// The five tracked nutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Calories,
    Fats,
    Sodium,
    Carbohydrates,
    Protein,
}

impl Nutrient {
    /// Every nutrient, in display order.
    pub const ALL: [Nutrient; 5] = [
        Nutrient::Calories,
        Nutrient::Fats,
        Nutrient::Sodium,
        Nutrient::Carbohydrates,
        Nutrient::Protein,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Fats => "Fats",
            Nutrient::Sodium => "Sodium",
            Nutrient::Carbohydrates => "Carbohydrates",
            Nutrient::Protein => "Protein",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            _ => "g",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Nutrient amounts for a food portion or for aggregated totals.
///
/// All five fields are always present; missing data is represented as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientVector {
    #[serde(rename = "Calories")]
    pub calories: f64,

    #[serde(rename = "Fats")]
    pub fats: f64,

    #[serde(rename = "Sodium")]
    pub sodium: f64,

    #[serde(rename = "Carbohydrates")]
    pub carbohydrates: f64,

    #[serde(rename = "Protein")]
    pub protein: f64,
}

impl NutrientVector {
    pub fn new(calories: f64, fats: f64, sodium: f64, carbohydrates: f64, protein: f64) -> Self {
        Self {
            calories,
            fats,
            sodium,
            carbohydrates,
            protein,
        }
    }

    /// The all-zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Fats => self.fats,
            Nutrient::Sodium => self.sodium,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Protein => self.protein,
        }
    }

    /// Multiply every field by `ratio`.
    pub fn scaled(&self, ratio: f64) -> Self {
        Self {
            calories: self.calories * ratio,
            fats: self.fats * ratio,
            sodium: self.sodium * ratio,
            carbohydrates: self.carbohydrates * ratio,
            protein: self.protein * ratio,
        }
    }

    pub fn is_zero(&self) -> bool {
        Nutrient::ALL.iter().all(|&n| self.get(n) == 0.0)
    }
}

impl Add for NutrientVector {
    type Output = NutrientVector;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            calories: self.calories + rhs.calories,
            fats: self.fats + rhs.fats,
            sodium: self.sodium + rhs.sodium,
            carbohydrates: self.carbohydrates + rhs.carbohydrates,
            protein: self.protein + rhs.protein,
        }
    }
}

impl AddAssign for NutrientVector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutrientVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientVector::zero(), Add::add)
    }
}

impl<'a> Sum<&'a NutrientVector> for NutrientVector {
    fn sum<I: Iterator<Item = &'a NutrientVector>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NutrientVector {
        NutrientVector::new(52.0, 0.2, 0.001, 14.0, 0.3)
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let total: NutrientVector = Vec::<NutrientVector>::new().into_iter().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_add_is_keywise() {
        let a = sample();
        let b = NutrientVector::new(100.0, 1.0, 0.5, 2.0, 3.0);
        let sum = a + b;
        assert!((sum.calories - 152.0).abs() < 1e-9);
        assert!((sum.fats - 1.2).abs() < 1e-9);
        assert!((sum.sodium - 0.501).abs() < 1e-9);
        assert!((sum.carbohydrates - 16.0).abs() < 1e-9);
        assert!((sum.protein - 3.3).abs() < 1e-9);
    }

    #[test]
    fn test_scaled() {
        let half = sample().scaled(0.5);
        assert!((half.calories - 26.0).abs() < 1e-9);
        assert!((half.carbohydrates - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_get_matches_fields() {
        let v = sample();
        assert_eq!(v.get(Nutrient::Calories), v.calories);
        assert_eq!(v.get(Nutrient::Protein), v.protein);
        assert_eq!(Nutrient::Calories.unit(), "kcal");
        assert_eq!(Nutrient::Sodium.unit(), "g");
    }

    #[test]
    fn test_serializes_canonical_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        for nutrient in Nutrient::ALL {
            assert!(json.get(nutrient.label()).is_some());
        }
    }
}
