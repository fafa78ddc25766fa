// src/error.rs
//
// Error taxonomy for a watch run:
// - Config is fatal and raised before any network activity.
// - Fetch and Parse are scoped to one category; the runner logs and skips.
// - Notify surfaces a failed mail dispatch after the snapshot is persisted.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("config: {0}")]
    Config(String),

    #[error("fetch category {category_id}: {reason}")]
    Fetch { category_id: u32, reason: String },

    #[error("parse category {category_id}: {reason}")]
    Parse { category_id: u32, reason: String },

    #[error("notify: {0}")]
    Notify(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
