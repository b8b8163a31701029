//! Tunables for search and the create-attendee affordance.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Engine settings, deserialised from the `[engine]` table of the config
/// file. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
  /// Offer "create new attendee" only while a search returns at most this
  /// many people.
  pub create_offer_threshold: usize,
  /// Maximum number of search results shown in the dropdown.
  pub result_limit:           usize,
}

impl Default for EngineSettings {
  fn default() -> Self {
    Self {
      create_offer_threshold: 3,
      result_limit:           10,
    }
  }
}

impl EngineSettings {
  pub fn validate(&self) -> Result<()> {
    if self.result_limit == 0 {
      return Err(Error::InvalidSettings(
        "result_limit must be at least 1".into(),
      ));
    }
    Ok(())
  }
}
