//! Error type for `attendee-engine`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] attendee_core::Error),

  #[error("invalid engine settings: {0}")]
  InvalidSettings(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
