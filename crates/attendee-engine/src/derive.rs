//! Pure derivations the presentation layer calls on demand: chip labels,
//! ghost-text completion, the per-person cost helper, and name validity.

use attendee_core::Person;
use serde::Serialize;

use crate::selection::Selection;

/// Separator between a name and its annotation.
pub const SEPARATOR: &str = " · ";

/// Message attached to attendees without a surname.
pub const INCOMPLETE_NAME_MESSAGE: &str =
  "Remove this attendee and enter a full name";

/// Appended to the cost helper when the purchaser is not an attendee.
pub const PURCHASER_ABSENT_NOTE: &str = "Purchaser not on expense";

// ─── Labels ──────────────────────────────────────────────────────────────────

/// The chip label for `person` given the current selection.
pub fn compute_label(person: &Person, selection: &Selection) -> String {
  if person.is_purchaser && selection.contains(person.id.as_str()) {
    format!("{}{SEPARATOR}Purchaser", person.full_name)
  } else if person.is_custom {
    format!("{}{SEPARATOR}Custom attendee", person.full_name)
  } else {
    person.full_name.clone()
  }
}

// ─── Completion ──────────────────────────────────────────────────────────────

/// `name` with a leading `prefix` removed, comparing characters without
/// regard to case. `None` when `prefix` does not lead `name`.
pub(crate) fn strip_prefix_ignore_case<'a>(
  name: &'a str,
  prefix: &str,
) -> Option<&'a str> {
  let mut rest = name.chars();
  for q in prefix.chars() {
    let c = rest.next()?;
    if !c.to_lowercase().eq(q.to_lowercase()) {
      return None;
    }
  }
  Some(rest.as_str())
}

/// Ghost text completing `query` to the first result's name.
///
/// Returns the tail of the name after the typed prefix, keeping the name's
/// own casing. `None` for a blank query, no results, a first result that
/// does not start with the query, or a query that already spells the whole
/// name.
pub fn suggest_completion(query: &str, results: &[&Person]) -> Option<String> {
  let query = query.trim();
  if query.is_empty() {
    return None;
  }
  let first = results.first()?;
  strip_prefix_ignore_case(&first.full_name, query)
    .filter(|rest| !rest.is_empty())
    .map(str::to_owned)
}

// ─── Cost ────────────────────────────────────────────────────────────────────

/// Parse a user-entered total. Blank, non-numeric and non-finite input
/// yields `None`, as does a number followed by anything else (`"100 USD"`).
pub fn parse_amount(total: &str) -> Option<f64> {
  total
    .trim()
    .parse::<f64>()
    .ok()
    .filter(|amount| amount.is_finite())
}

/// The "$X.XX per person" helper for a typed total, or `None` when there is
/// nothing useful to show.
pub fn compute_per_person_cost(
  total: &str,
  selection: &Selection,
) -> Option<String> {
  per_person_cost(parse_amount(total)?, selection)
}

/// As [`compute_per_person_cost`] for an already-numeric total.
///
/// The head count never drops below one.
pub fn per_person_cost(total: f64, selection: &Selection) -> Option<String> {
  let count = selection.len().max(1);
  let per_person = total / count as f64;
  if per_person.is_nan() || per_person <= 0.0 {
    return None;
  }
  let text = format!("${per_person:.2} per person");
  if selection.includes_purchaser() {
    Some(text)
  } else {
    Some(format!("{text}{SEPARATOR}{PURCHASER_ABSENT_NOTE}"))
  }
}

// ─── Validity ────────────────────────────────────────────────────────────────

/// Whether an attendee's name is complete enough for the expense report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Validity {
  Valid,
  Invalid { message: &'static str },
}

impl Validity {
  pub fn is_valid(&self) -> bool { matches!(self, Self::Valid) }

  pub fn message(&self) -> Option<&'static str> {
    match self {
      Self::Valid => None,
      Self::Invalid { message } => Some(*message),
    }
  }
}

/// An attendee needs at least a given name and a surname.
pub fn compute_validity(person: &Person) -> Validity {
  if person.full_name.split_whitespace().nth(1).is_some() {
    Validity::Valid
  } else {
    Validity::Invalid {
      message: INCOMPLETE_NAME_MESSAGE,
    }
  }
}
