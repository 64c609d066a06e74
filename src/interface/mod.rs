pub mod prompts;
pub mod render;

pub use prompts::{Action, prompt_action, prompt_food_entry, prompt_profile};
pub use render::{display_error, display_instructions, display_macro_chart, display_report};
