//! Error types for `attendee-core`.

use thiserror::Error;

use crate::person::PersonId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("attendee name is empty")]
  InvalidName,

  #[error("duplicate person id in seed: {0}")]
  DuplicateId(PersonId),

  #[error("person {0} has a blank full name")]
  BlankName(PersonId),

  #[error("seed has no purchaser record")]
  MissingPurchaser,

  /// A record other than the well-known purchaser id claims to be the
  /// purchaser.
  #[error("person {0} is flagged as purchaser but is not the purchaser record")]
  MisplacedPurchaser(PersonId),

  #[error("seed person {0} is flagged as custom")]
  CustomInSeed(PersonId),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
