/// Calories burned per mile per pound of body weight, men.
pub const MALE_KCAL_PER_LB_MILE: f64 = 0.75;

/// Calories burned per mile per pound of body weight, women.
pub const FEMALE_KCAL_PER_LB_MILE: f64 = 0.65;

// ─────────────────────────────────────────────────────────────────────────────
// Terrain difficulty bands (inclusive)
// ─────────────────────────────────────────────────────────────────────────────

/// Ratings 1..=4: flat ground.
pub const EASY_TERRAIN_MAX: i32 = 4;
pub const EASY_TERRAIN_MULT: f64 = 1.0;

/// Ratings 5..=7: hills or rough paths.
pub const MODERATE_TERRAIN_MIN: i32 = 5;
pub const MODERATE_TERRAIN_MAX: i32 = 7;
pub const MODERATE_TERRAIN_MULT: f64 = 1.4;

/// Everything else, including ratings outside 1-10.
pub const HARD_TERRAIN_MULT: f64 = 1.6;

// ─────────────────────────────────────────────────────────────────────────────
// BMR (simplified Mifflin-St Jeor variant)
// ─────────────────────────────────────────────────────────────────────────────

pub const LB_PER_KG: f64 = 2.2;
pub const CM_PER_INCH: f64 = 2.54;

pub const BMR_WEIGHT_COEFF: f64 = 10.0;
pub const BMR_HEIGHT_COEFF: f64 = 6.5;
pub const BMR_AGE_COEFF: f64 = 5.0;
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = 161.0;
