use crate::models::Rarity;

#[derive(Debug, thiserror::Error)]
pub enum CampusError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{rarity} pool exhausted: need {needed}, have {available}")]
    PoolExhausted {
        rarity: Rarity,
        needed: usize,
        available: usize,
    },

    #[error("no boosters left to open")]
    OutOfBoosters,

    #[error("free booster not collectible until {next_at}")]
    NotYetCollectible { next_at: chrono::NaiveDateTime },
}

pub type Result<T> = std::result::Result<T, CampusError>;
