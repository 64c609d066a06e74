use dialoguer::{Input, Select};

use crate::error::Result;
use crate::models::ProfileInput;

/// Main menu choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddFood,
    CalculateTotals,
    Exit,
}

impl Action {
    const ALL: [Action; 3] = [Action::AddFood, Action::CalculateTotals, Action::Exit];

    fn label(self) -> &'static str {
        match self {
            Action::AddFood => "Add Food Item",
            Action::CalculateTotals => "Calculate Totals",
            Action::Exit => "Exit",
        }
    }
}

/// Prompt for the next menu action.
pub fn prompt_action(entry_count: usize) -> Result<Action> {
    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt(format!("Food Items Entered: {}", entry_count))
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Action::ALL.get(selection).copied().unwrap_or(Action::Exit))
}

/// Free-text prompt that keeps whatever was typed, including nothing.
fn prompt_raw(prompt: &str, previous: &str) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
    if !previous.is_empty() {
        input = input.default(previous.to_string());
    }
    Ok(input.interact_text()?)
}

/// Prompt for a food name and gram amount, returned as typed.
pub fn prompt_food_entry() -> Result<(String, String)> {
    let food = prompt_raw("Food Name", "")?;
    let grams = prompt_raw("Grams", "")?;
    Ok((food, grams))
}

/// Prompt for the profile and walk fields, offering the previous values as defaults.
pub fn prompt_profile(previous: &ProfileInput) -> Result<ProfileInput> {
    Ok(ProfileInput {
        age: prompt_raw("Age", &previous.age)?,
        height: prompt_raw("Height (in inches)", &previous.height)?,
        weight: prompt_raw("Weight (in pounds)", &previous.weight)?,
        gender: prompt_raw("Gender (M/F)", &previous.gender)?,
        distance: prompt_raw("Distance Walked (in miles)", &previous.distance)?,
        terrain: prompt_raw("Terrain Difficulty (1-10)", &previous.terrain)?,
    })
}
