//! Serialisable render models handed to the presentation layer.

use attendee_core::{
  EmployeeType, Person, PersonId,
  avatar::{avatar_color, initials},
};
use serde::Serialize;

use crate::{
  derive::{Validity, compute_label, compute_validity},
  selection::Selection,
};

/// Shown on the profile card for metadata the directory does not have.
pub const NOT_SPECIFIED: &str = "Not specified";

/// One attendee chip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendeeView {
  pub id:           PersonId,
  pub label:        String,
  pub initials:     String,
  pub avatar_color: &'static str,
  pub validity:     Validity,
  /// False for the last remaining attendee; the remove button is hidden.
  pub removable:    bool,
}

impl AttendeeView {
  pub(crate) fn new(
    person: &Person,
    selection: &Selection,
    removable: bool,
  ) -> Self {
    Self {
      id: person.id.clone(),
      label: compute_label(person, selection),
      initials: initials(&person.full_name),
      avatar_color: avatar_color(person.id.as_str()),
      validity: compute_validity(person),
      removable,
    }
  }
}

/// Hover-card contents for one person.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileCard {
  pub employee_type: EmployeeType,
  pub full_name:     String,
  pub email:         Option<String>,
  pub initials:      String,
  pub avatar_color:  &'static str,
  pub job_title:     Option<String>,
  pub department:    Option<String>,
  pub work_location: String,
  pub manager:       Option<String>,
  /// Set when the manager is also in the directory, so the name can link
  /// to their card.
  pub manager_id:    Option<PersonId>,
  pub tenure:        String,
}

impl ProfileCard {
  pub(crate) fn new(person: &Person, manager_id: Option<PersonId>) -> Self {
    let or_unspecified = |field: &Option<String>| {
      field.clone().unwrap_or_else(|| NOT_SPECIFIED.to_owned())
    };
    Self {
      employee_type: person.employee_type.unwrap_or_default(),
      full_name: person.full_name.clone(),
      email: person.email.clone(),
      initials: initials(&person.full_name),
      avatar_color: avatar_color(person.id.as_str()),
      job_title: person.job_title.clone(),
      department: person.department.clone(),
      work_location: or_unspecified(&person.work_location),
      manager: person.manager.clone(),
      manager_id,
      tenure: or_unspecified(&person.tenure),
    }
  }
}

/// Full render state of the attendee field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSnapshot {
  pub selection:       Selection,
  pub attendees:       Vec<AttendeeView>,
  /// Helper text under the field; absent when there is no usable total.
  pub per_person_cost: Option<String>,
  pub query:           String,
}
