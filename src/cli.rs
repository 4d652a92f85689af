use clap::{Parser, Subcommand};

/// Escandallo — recipe costing, yield tests, and menu engineering.
#[derive(Parser, Debug)]
#[command(name = "escandallo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe book JSON file.
    #[arg(short, long, default_value = "recipe_book.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Cost a recipe and print the full escandallo.
    Cost {
        /// Recipe name (fuzzy-matched against the book).
        recipe: String,

        /// Also write the breakdown to a CSV file.
        #[arg(long)]
        csv: Option<String>,
    },

    /// Enter a new recipe interactively and save it to the book.
    New,

    /// Run an interactive meat yield test.
    YieldTest,

    /// Classify sold menu items into profitability quadrants.
    Engineer {
        /// Path to a menu sales JSON file.
        #[arg(long)]
        sales: String,
    },

    /// List recipes in the book.
    List,
}

impl Default for Command {
    fn default() -> Self {
        Command::List
    }
}
