use std::str::FromStr;

use serde::Serialize;

use crate::error::{BalanceError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            other => Err(BalanceError::InputValidation(format!(
                "gender must be 'M' or 'F', got '{}'",
                other
            ))),
        }
    }
}

/// Body metrics in imperial units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyProfile {
    /// Age in whole years.
    pub age: u32,

    /// Height in inches.
    pub height_in: f64,

    /// Weight in pounds.
    pub weight_lb: f64,

    pub gender: Gender,
}

impl BodyProfile {
    pub fn new(age: u32, height_in: f64, weight_lb: f64, gender: Gender) -> Result<Self> {
        if age == 0 {
            return Err(BalanceError::InputValidation(
                "age must be a positive whole number".to_string(),
            ));
        }
        require_positive("height", height_in)?;
        require_positive("weight", weight_lb)?;

        Ok(Self {
            age,
            height_in,
            weight_lb,
            gender,
        })
    }

    #[inline]
    pub fn is_male(&self) -> bool {
        self.gender == Gender::Male
    }
}

/// A walk: distance covered and a 1-10 terrain difficulty rating.
///
/// The rating is not range-checked; values outside 1-10 fall into the
/// hardest multiplier band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WalkActivity {
    pub distance_miles: f64,
    pub terrain_difficulty: i32,
}

impl WalkActivity {
    pub fn new(distance_miles: f64, terrain_difficulty: i32) -> Result<Self> {
        if !distance_miles.is_finite() || distance_miles < 0.0 {
            return Err(BalanceError::InputValidation(format!(
                "distance must be a non-negative number of miles, got {}",
                distance_miles
            )));
        }

        Ok(Self {
            distance_miles,
            terrain_difficulty,
        })
    }
}

/// Raw text for the profile and walk fields, exactly as the user typed them.
#[derive(Debug, Clone, Default)]
pub struct ProfileInput {
    pub age: String,
    pub height: String,
    pub weight: String,
    pub gender: String,
    pub distance: String,
    pub terrain: String,
}

impl ProfileInput {
    /// Validate every field, stopping at the first bad one.
    pub fn parse(&self) -> Result<(BodyProfile, WalkActivity)> {
        let age: u32 = parse_field("age", &self.age, "a positive whole number")?;
        let height: f64 = parse_field("height", &self.height, "a number")?;
        let weight: f64 = parse_field("weight", &self.weight, "a number")?;
        let gender: Gender = self.gender.parse()?;
        let distance: f64 = parse_field("distance", &self.distance, "a number")?;
        let terrain: i32 = parse_field("terrain difficulty", &self.terrain, "a whole number")?;

        let profile = BodyProfile::new(age, height, weight, gender)?;
        let walk = WalkActivity::new(distance, terrain)?;
        Ok((profile, walk))
    }
}

fn parse_field<T: FromStr>(field: &str, raw: &str, expected: &str) -> Result<T> {
    let raw = raw.trim();
    raw.parse().map_err(|_| {
        BalanceError::InputValidation(format!("invalid {}: '{}' is not {}", field, raw, expected))
    })
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BalanceError::InputValidation(format!(
            "{} must be a positive number, got {}",
            field, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> ProfileInput {
        ProfileInput {
            age: "30".to_string(),
            height: "70".to_string(),
            weight: "180".to_string(),
            gender: "M".to_string(),
            distance: "2.5".to_string(),
            terrain: "6".to_string(),
        }
    }

    #[test]
    fn test_gender_case_insensitive() {
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" f ".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert!("x".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn test_parse_valid_input() {
        let (profile, walk) = sample_input().parse().unwrap();
        assert_eq!(profile.age, 30);
        assert_eq!(profile.height_in, 70.0);
        assert_eq!(profile.weight_lb, 180.0);
        assert!(profile.is_male());
        assert_eq!(walk.distance_miles, 2.5);
        assert_eq!(walk.terrain_difficulty, 6);
    }

    #[test]
    fn test_parse_rejects_non_numeric_age() {
        let mut input = sample_input();
        input.age = "thirty".to_string();
        let err = input.parse().unwrap_err();
        assert!(matches!(err, BalanceError::InputValidation(_)));
        assert!(err.to_string().contains("age"));
    }

    #[test]
    fn test_parse_rejects_fractional_terrain() {
        let mut input = sample_input();
        input.terrain = "5.5".to_string();
        assert!(input.parse().is_err());
    }

    #[test]
    fn test_error_names_expected_kind() {
        let mut input = sample_input();
        input.age = "-5".to_string();
        let msg = input.parse().unwrap_err().to_string();
        assert_eq!(msg, "invalid age: '-5' is not a positive whole number");

        let mut input = sample_input();
        input.terrain = "5.5".to_string();
        let msg = input.parse().unwrap_err().to_string();
        assert_eq!(msg, "invalid terrain difficulty: '5.5' is not a whole number");

        let mut input = sample_input();
        input.height = "tall".to_string();
        let msg = input.parse().unwrap_err().to_string();
        assert_eq!(msg, "invalid height: 'tall' is not a number");
    }

    #[test]
    fn test_parse_keeps_out_of_range_terrain() {
        let mut input = sample_input();
        input.terrain = "0".to_string();
        let (_, walk) = input.parse().unwrap();
        assert_eq!(walk.terrain_difficulty, 0);
    }

    #[test]
    fn test_rejects_non_positive_metrics() {
        assert!(BodyProfile::new(0, 70.0, 180.0, Gender::Male).is_err());
        assert!(BodyProfile::new(30, -1.0, 180.0, Gender::Male).is_err());
        assert!(BodyProfile::new(30, 70.0, 0.0, Gender::Female).is_err());
        assert!(WalkActivity::new(-0.1, 3).is_err());
        assert!(WalkActivity::new(0.0, 3).is_ok());
    }
}
