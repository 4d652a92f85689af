use thiserror::Error;

#[derive(Debug, Error)]
pub enum CostError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Decimal overflow")]
    Overflow,

    #[error("Invalid yield percentage: {0}")]
    InvalidYield(String),

    #[error("Invalid portion count: {0}")]
    InvalidPortions(i64),

    #[error("Invalid target food cost percentage: {0}")]
    InvalidTarget(String),

    #[error("Invalid AP weight: {0}")]
    InvalidWeight(String),

    #[error("Menu engineering requires at least one item")]
    EmptyItemSet,

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, CostError>;
