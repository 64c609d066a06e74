use crate::session::{BalanceReport, MacroShare};

/// Width of a 100% bar in the macro chart.
const CHART_WIDTH: usize = 40;

/// Print the start-up instructions.
pub fn display_instructions() {
    println!();
    println!("=== Welcome to the Energy Balance Tracker! ===");
    println!();
    println!("Instructions:");
    println!("- Choose 'Add Food Item' and enter a food name and grams to log it.");
    println!("- Choose 'Calculate Totals' and enter your Age, Height, Weight and Gender,");
    println!("  plus the Distance Walked and Terrain Difficulty.");
    println!("- Review the nutrition totals, calories burned, BMR and macro chart.");
    println!("- Choose 'Exit' to close the application.");
    println!();
}

/// Print a full report: per-item breakdown, totals, advice and chart.
pub fn display_report(report: &BalanceReport) {
    println!();
    println!("=== Individual Food Items ===");
    println!();

    if report.breakdown.is_empty() {
        println!("(no food items entered)");
        println!();
    }
    for line in report.breakdown_lines() {
        println!("{}", line);
    }

    for line in report.summary_lines() {
        println!("{}", line);
    }
    println!();
    println!("{}", report.advice());

    display_macro_chart(&report.macro_proportions());
}

/// Print the fats / carbohydrates / protein proportions as horizontal bars.
pub fn display_macro_chart(shares: &[MacroShare]) {
    println!();
    println!("--- Macro Proportions ---");

    if shares.iter().all(|s| s.grams <= 0.0) {
        println!("(no macronutrients recorded)");
        println!();
        return;
    }

    let label_width = shares.iter().map(|s| s.nutrient.len()).max().unwrap_or(0) + 4;
    for share in shares {
        println!(
            "{:<width$} {:<bar$} {:>5.1}%",
            format!("{} (g)", share.nutrient),
            bar(share.percent),
            share.percent,
            width = label_width,
            bar = CHART_WIDTH
        );
    }
    println!();
}

/// Replace the result display with a single error line.
pub fn display_error(message: &str) {
    println!();
    println!("Error: {}", message);
    println!();
}

fn bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * CHART_WIDTH as f64).round() as usize;
    "#".repeat(filled.min(CHART_WIDTH))
}
