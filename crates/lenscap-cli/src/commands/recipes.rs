//! Recipes command handler for listing the recipe catalog.

use lenscap_lib::{JOBS_PER_CHAMBER, LENSES_PER_CHAMBER, RECIPES};

/// Handle the recipes subcommand.
pub fn handle_list_recipes() {
    print_recipe_catalog();
}

/// Print the recipe catalog to stdout in a formatted table.
fn print_recipe_catalog() {
    println!("Available recipes ({}):", RECIPES.len());
    println!("{:<18} {:>14} {:>16}", "Name", "Default Mix %", "Cycle Time (h)");
    for recipe in &RECIPES {
        println!(
            "{:<18} {:>14.2} {:>16.2}",
            recipe.name, recipe.participation, recipe.cycle_time_hours
        );
    }
    println!("\n1 chamber = {LENSES_PER_CHAMBER:.0} lenses = {JOBS_PER_CHAMBER:.0} jobs");
}
