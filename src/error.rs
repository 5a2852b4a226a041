//! Error type for the configuration and scene surfaces
//!
//! The collision kernel itself never fails: degenerate numerics resolve to
//! "no event". Only loading configuration and building scenes can error.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Configuration value out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Invalid disk or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Scene setup could not place disks without overlap.
    #[error("placement failed: {0}")]
    Placement(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
