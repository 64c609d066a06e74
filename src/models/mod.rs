pub mod balance;
pub mod entry;
pub mod nutrients;
pub mod profile;

pub use balance::{BalanceResult, Classification, EnergyResult};
pub use entry::FoodEntry;
pub use nutrients::{Nutrient, NutrientVector};
pub use profile::{BodyProfile, Gender, ProfileInput, WalkActivity};
