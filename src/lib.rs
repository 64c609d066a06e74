pub mod cli;
pub mod energy;
pub mod error;
pub mod interface;
pub mod lookup;
pub mod models;
pub mod session;

pub use error::{BalanceError, Result};
pub use models::{BalanceResult, FoodEntry, NutrientVector};
pub use session::{BalanceReport, Session};
