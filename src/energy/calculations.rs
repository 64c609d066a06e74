use crate::energy::constants::*;
use crate::models::{BodyProfile, EnergyResult, WalkActivity};

/// Multiplier for a terrain difficulty rating.
///
/// 1-4 -> 1.0, 5-7 -> 1.4, anything else -> 1.6. Ratings below 1 land in the
/// last band as well.
pub fn terrain_multiplier(terrain_difficulty: i32) -> f64 {
    if (1..=EASY_TERRAIN_MAX).contains(&terrain_difficulty) {
        EASY_TERRAIN_MULT
    } else if (MODERATE_TERRAIN_MIN..=MODERATE_TERRAIN_MAX).contains(&terrain_difficulty) {
        MODERATE_TERRAIN_MULT
    } else {
        HARD_TERRAIN_MULT
    }
}

/// Calories burned per mile for this body.
#[inline]
pub fn calories_per_mile(profile: &BodyProfile) -> f64 {
    let rate = if profile.is_male() {
        MALE_KCAL_PER_LB_MILE
    } else {
        FEMALE_KCAL_PER_LB_MILE
    };
    rate * profile.weight_lb
}

/// Calories burned on a walk.
///
/// Formula: per-mile rate * distance * terrain multiplier
pub fn calories_burned(profile: &BodyProfile, walk: &WalkActivity) -> f64 {
    calories_per_mile(profile) * walk.distance_miles * terrain_multiplier(walk.terrain_difficulty)
}

/// Basal metabolic rate in kcal/day.
///
/// 10*kg + 6.5*cm - 5*age + (5 for men, 161 otherwise)
pub fn bmr(profile: &BodyProfile) -> f64 {
    let weight_kg = profile.weight_lb / LB_PER_KG;
    let height_cm = profile.height_in * CM_PER_INCH;
    let offset = if profile.is_male() {
        BMR_MALE_OFFSET
    } else {
        BMR_FEMALE_OFFSET
    };

    BMR_WEIGHT_COEFF * weight_kg + BMR_HEIGHT_COEFF * height_cm
        - BMR_AGE_COEFF * profile.age as f64
        + offset
}

pub fn compute_energy(profile: &BodyProfile, walk: &WalkActivity) -> EnergyResult {
    EnergyResult {
        calories_burned: calories_burned(profile, walk),
        bmr: bmr(profile),
    }
}
