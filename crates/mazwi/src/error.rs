use thiserror::Error;

use prosuite_core::ProsuiteError;

#[derive(Error, Debug)]
pub enum MazwiError {
    /// A derived figure could not be computed from the snapshot.
    #[error(transparent)]
    Metrics(#[from] ProsuiteError),

    #[error("Response formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
}
