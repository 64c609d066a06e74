use std::str::FromStr;

use serde::Serialize;

use crate::error::{BalanceError, Result};

/// A logged food portion: a food name and a weight in grams.
///
/// Entries are only built through [`FoodEntry::new`], so the name is never
/// empty and grams are always strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodEntry {
    name: String,
    grams: f64,
}

impl FoodEntry {
    pub fn new(name: &str, grams: f64) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BalanceError::InvalidEntry(
                "food name must not be empty".to_string(),
            ));
        }

        if !grams.is_finite() || grams <= 0.0 {
            return Err(BalanceError::InvalidEntry(format!(
                "grams must be a positive number, got {}",
                grams
            )));
        }

        Ok(Self {
            name: name.to_string(),
            grams,
        })
    }

    /// Build an entry from raw text fields as typed by the user.
    pub fn from_raw(name: &str, grams: &str) -> Result<Self> {
        let grams: f64 = grams.trim().parse().map_err(|_| {
            BalanceError::InvalidEntry(format!("grams must be a number, got '{}'", grams.trim()))
        })?;
        Self::new(name, grams)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grams(&self) -> f64 {
        self.grams
    }
}

/// Parses the `name=grams` form used on the command line.
impl FromStr for FoodEntry {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, grams) = s.rsplit_once('=').ok_or_else(|| {
            BalanceError::InvalidEntry(format!("expected NAME=GRAMS, got '{}'", s))
        })?;
        Self::from_raw(name, grams)
    }
}
