use clap::Parser;
use std::path::Path;

use escandallo_rs::cli::{Cli, Command};
use escandallo_rs::costing::{classify_menu, cost_recipe, run_yield_test};
use escandallo_rs::error::Result;
use escandallo_rs::interface::{
    display_cost_report, display_menu_matrix, display_recipe_list, display_yield_test,
    find_recipe_name, prompt_recipe, prompt_yes_no, prompt_yield_test,
};
use escandallo_rs::state::{
    export_breakdown_csv, load_menu_items, load_recipes, save_recipes, RecipeBook,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Cost { recipe, csv } => cmd_cost(&cli.file, &recipe, csv.as_deref()),
        Command::New => cmd_new(&cli.file),
        Command::YieldTest => cmd_yield_test(),
        Command::Engineer { sales } => cmd_engineer(&sales),
        Command::List => cmd_list(&cli.file),
    }
}

fn load_book(file_path: &str) -> Result<Option<RecipeBook>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Recipe book not found: {}", file_path);
        eprintln!("Use 'new' to create the first recipe.");
        return Ok(None);
    }

    let recipes = load_recipes(path)?;
    Ok(Some(RecipeBook::new(recipes)))
}

/// Cost a recipe from the book and display the escandallo.
fn cmd_cost(file_path: &str, query: &str, csv: Option<&str>) -> Result<()> {
    let Some(book) = load_book(file_path)? else {
        return Ok(());
    };

    let Some(name) = find_recipe_name(query, &book.names()) else {
        println!("No recipe matching '{}'.", query);
        return Ok(());
    };

    let recipe = book.get_required(&name)?;
    let result = cost_recipe(recipe)?;

    display_cost_report(&result);

    if let Some(csv_path) = csv {
        export_breakdown_csv(csv_path, &result)?;
        println!("Breakdown written to {}", csv_path);
    }

    Ok(())
}

/// Enter a new recipe interactively, cost it once as a sanity check, and save.
fn cmd_new(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    let mut book = if path.exists() {
        RecipeBook::new(load_recipes(path)?)
    } else {
        RecipeBook::new(Vec::new())
    };

    let recipe = prompt_recipe()?;

    match cost_recipe(&recipe) {
        Ok(result) => display_cost_report(&result),
        Err(e) => println!("Could not cost recipe: {}", e),
    }

    let save = prompt_yes_no("Save recipe to the book?", true)?;
    if save {
        book.upsert(recipe);
        save_recipes(path, &book.to_recipes())?;
        println!("Recipe book saved ({} recipes).", book.len());
    }

    Ok(())
}

/// Run an interactive meat yield test.
fn cmd_yield_test() -> Result<()> {
    let test = prompt_yield_test()?;

    if test.parts.is_empty() {
        println!("No parts entered.");
        return Ok(());
    }

    let result = run_yield_test(&test)?;
    display_yield_test(&result);

    Ok(())
}

/// Classify sold menu items from a sales file.
fn cmd_engineer(sales_path: &str) -> Result<()> {
    let path = Path::new(sales_path);

    if !path.exists() {
        eprintln!("Sales file not found: {}", sales_path);
        return Ok(());
    }

    let items = load_menu_items(path)?;
    let classified = classify_menu(&items)?;

    display_menu_matrix(&classified);

    Ok(())
}

/// List recipes in the book.
fn cmd_list(file_path: &str) -> Result<()> {
    let Some(book) = load_book(file_path)? else {
        return Ok(());
    };

    display_recipe_list(&book.all());

    Ok(())
}
