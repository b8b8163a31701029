//! The ordered, duplicate-free list of attendee ids on an expense.

use serde::Serialize;

use attendee_core::PersonId;

/// Attendee ids in the order they were added.
///
/// Re-adding a removed id puts it at the end. Only the engine mutates a
/// selection; callers get a shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection(Vec<PersonId>);

impl Default for Selection {
  fn default() -> Self { Self(vec![PersonId::purchaser()]) }
}

impl Selection {
  /// A selection holding `ids` in order, with later duplicates dropped.
  pub fn from_ids<I, T>(ids: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: Into<PersonId>,
  {
    let mut selection = Self(Vec::new());
    for id in ids {
      selection.push(id.into());
    }
    selection
  }

  pub fn ids(&self) -> &[PersonId] { &self.0 }

  pub fn len(&self) -> usize { self.0.len() }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn contains(&self, id: &str) -> bool { self.0.iter().any(|s| s == id) }

  pub fn includes_purchaser(&self) -> bool {
    self.0.iter().any(PersonId::is_purchaser)
  }

  /// Append `id` unless present. Returns whether it was added.
  pub(crate) fn push(&mut self, id: PersonId) -> bool {
    if self.contains(id.as_str()) {
      return false;
    }
    self.0.push(id);
    true
  }

  /// Drop `id` if present. Returns whether it was removed.
  pub(crate) fn remove(&mut self, id: &str) -> bool {
    let before = self.0.len();
    self.0.retain(|s| s != id);
    self.0.len() != before
  }
}

#[cfg(test)]
mod tests {
  use attendee_core::PURCHASER_ID;

  use super::*;

  #[test]
  fn starts_with_purchaser() {
    let s = Selection::default();
    assert_eq!(s.ids(), [PersonId::purchaser()]);
    assert!(s.includes_purchaser());
  }

  #[test]
  fn from_ids_drops_duplicates() {
    let s = Selection::from_ids(["1", "2", "1", PURCHASER_ID]);
    assert_eq!(s.len(), 3);
    assert!(s.contains("2"));
  }

  #[test]
  fn readding_moves_to_end() {
    let mut s = Selection::from_ids(["1", "2", "3"]);
    assert!(s.remove("1"));
    assert!(!s.remove("1"));
    assert!(s.push("1".into()));
    assert!(!s.push("3".into()));
    let ids: Vec<&str> = s.ids().iter().map(PersonId::as_str).collect();
    assert_eq!(ids, ["2", "3", "1"]);
  }
}
