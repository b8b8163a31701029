//! Person: the identity record behind every attendee chip.
//!
//! Identity is the [`PersonId`] alone. Every other field is descriptive
//! metadata used for search and hover-card display.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Id of the one seed record that pays for the expense by default.
pub const PURCHASER_ID: &str = "purchaser-lando-norris";

// ─── Identifier ──────────────────────────────────────────────────────────────

/// Opaque, stable identifier of a person within a [`crate::Directory`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
  pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

  /// The well-known purchaser id.
  pub fn purchaser() -> Self { Self(PURCHASER_ID.to_owned()) }

  pub fn as_str(&self) -> &str { &self.0 }

  pub fn is_purchaser(&self) -> bool { self.0 == PURCHASER_ID }
}

impl fmt::Display for PersonId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for PersonId {
  fn from(s: &str) -> Self { Self(s.to_owned()) }
}

impl From<String> for PersonId {
  fn from(s: String) -> Self { Self(s) }
}

impl AsRef<str> for PersonId {
  fn as_ref(&self) -> &str { &self.0 }
}

impl PartialEq<str> for PersonId {
  fn eq(&self, other: &str) -> bool { self.0 == other }
}

impl PartialEq<&str> for PersonId {
  fn eq(&self, other: &&str) -> bool { self.0 == *other }
}

// ─── Employment ──────────────────────────────────────────────────────────────

/// Employment relationship shown on the profile card.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Display,
  EnumString,
  Serialize,
  Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum EmployeeType {
  #[default]
  Employee,
  Contractor,
  Intern,
}

// ─── Person ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
  pub id:            PersonId,
  pub full_name:     String,
  #[serde(default)]
  pub job_title:     Option<String>,
  #[serde(default)]
  pub email:         Option<String>,
  #[serde(default)]
  pub department:    Option<String>,
  #[serde(default)]
  pub work_location: Option<String>,
  #[serde(default)]
  pub manager:       Option<String>,
  #[serde(default)]
  pub tenure:        Option<String>,
  #[serde(default)]
  pub employee_type: Option<EmployeeType>,
  /// Set only on the seed record whose id is [`PURCHASER_ID`].
  #[serde(default)]
  pub is_purchaser:  bool,
  /// Set on records created during the session.
  #[serde(default)]
  pub is_custom:     bool,
}

impl Person {
  /// A person with a name and no descriptive metadata.
  pub fn new(id: impl Into<PersonId>, full_name: impl Into<String>) -> Self {
    Self {
      id:            id.into(),
      full_name:     full_name.into(),
      job_title:     None,
      email:         None,
      department:    None,
      work_location: None,
      manager:       None,
      tenure:        None,
      employee_type: None,
      is_purchaser:  false,
      is_custom:     false,
    }
  }

  /// Case-insensitive exact comparison against a trimmed name.
  pub fn has_name(&self, name: &str) -> bool {
    self.full_name.to_lowercase() == name.trim().to_lowercase()
  }

  /// Whether any searchable field contains `needle`.
  ///
  /// `needle` must already be lowercased.
  pub fn matches(&self, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);
    contains(&self.full_name)
      || self.job_title.as_deref().is_some_and(contains)
      || self.email.as_deref().is_some_and(contains)
      || self.department.as_deref().is_some_and(contains)
  }
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use super::*;

  #[test]
  fn matches_searches_metadata_fields() {
    let mut p = Person::new("9", "Ryan Foster");
    p.job_title = Some("Backend Engineer".into());
    p.email = Some("ryan.foster@company.com".into());
    p.department = Some("Engineering".into());
    p.work_location = Some("New York".into());

    assert!(p.matches("ryan"));
    assert!(p.matches("backend"));
    assert!(p.matches("foster@"));
    assert!(p.matches("engineering"));
    // Work location is display-only.
    assert!(!p.matches("new york"));
  }

  #[test]
  fn has_name_ignores_case_and_outer_whitespace() {
    let p = Person::new("1", "Jordan Alvarez");
    assert!(p.has_name("  jordan alvarez "));
    assert!(!p.has_name("Jordan"));
  }

  #[test]
  fn employee_type_round_trips_through_strings() {
    assert_eq!(EmployeeType::Contractor.to_string(), "Contractor");
    assert_eq!(
      EmployeeType::from_str("intern").unwrap(),
      EmployeeType::Intern
    );
  }

  #[test]
  fn purchaser_id_compares_with_str() {
    assert!(PersonId::purchaser().is_purchaser());
    assert_eq!(PersonId::from("2"), "2");
  }
}
