use crate::core::{Outcome, RecipeRecord};
use crate::format::format_record;
use owo_colors::OwoColorize;

pub fn print_banner() {
    println!();
    println!(
        "   {}  {}",
        "STRAWBERRY".magenta().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
    println!("   {}", "Offline recipe picker".white());
    println!();
}

/// User-facing text for an outcome. `header` is printed above a match.
pub fn describe_outcome(outcome: &Outcome<'_>, header: Option<&str>) -> String {
    match outcome {
        Outcome::TooShort { max_minutes, floor } => format!(
            "No recipe for {} min is available, please select ≥ {} minutes.",
            max_minutes, floor
        ),
        Outcome::Shortage(missing) => {
            format!("We don't have any recipes with: {}", missing.join(", "))
        }
        Outcome::NoMatch { max_minutes } => match header {
            Some(_) => format!(
                "No recipe within {} min found that matches all ingredients.",
                max_minutes
            ),
            None => format!("No recipe found within {} min.", max_minutes),
        },
        Outcome::Match(record) => match header {
            Some(h) => format!("{}\n\n{}", h, format_record(record)),
            None => format_record(record),
        },
    }
}

pub fn print_outcome(outcome: &Outcome<'_>, header: Option<&str>) {
    let text = describe_outcome(outcome, header);
    match outcome {
        Outcome::Match(_) => {
            let mode = if header.is_some() { "Local match ✅" } else { "Surprise 🎲" };
            println!("{}\n", mode.magenta().bold());
            println!("{}", text);
        }
        Outcome::Shortage(_) => log_warn(&format!("shortage on recipes. {}", text)),
        _ => log_info(&text),
    }
}

pub fn print_listing(recipes: &[RecipeRecord]) {
    println!("{}", "RECIPES".bold().underline());
    if recipes.is_empty() {
        println!("No recipes loaded");
    }
    for r in recipes {
        println!("{} - {} min", r.name.green().bold(), r.minutes);
    }
    println!();
}

pub fn log_error(msg: &str) {
    println!("{} {}", "✖ Error:".red().bold(), msg);
}

pub fn log_warn(msg: &str) {
    println!("{} {}", "⚠ Warning:".yellow().bold(), msg);
}

pub fn log_info(msg: &str) {
    println!("{} {}", "ℹ".blue().bold(), msg);
}

pub fn log_success(msg: &str) {
    println!("{} {}", "✔ Success:".green().bold(), msg);
}
