pub mod calculations;
pub mod constants;

pub use calculations::{bmr, calories_burned, calories_per_mile, compute_energy, terrain_multiplier};
pub use constants::*;
