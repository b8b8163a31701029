//! Pasted attendee-list codec.
//!
//! Turns text pasted into the attendee field into a list of candidate names.
//! Pure and synchronous; it knows nothing about the directory beyond the
//! names the caller says are already selected.
//!
//! # Quick start
//!
//! ```
//! let raw = "Jordan Alvarez <jordan@example.com>, alexandra chen, Alexandra Chen";
//! let names = attendee_csv::candidate_names(raw, &["Lando Norris"]);
//! assert_eq!(names, ["Jordan Alvarez", "alexandra chen"]);
//! ```

mod parse;

use serde::Serialize;

// ─── Public types ────────────────────────────────────────────────────────────

/// One comma-separated entry as it was recognised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PastedEntry {
  /// The display name to resolve against the directory.
  pub name:  String,
  /// The address from a calendar-style `Name <email>` entry. Informational
  /// only; it never becomes the attendee's address.
  pub email: Option<String>,
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Whether `raw` should be treated as a multi-person paste at all.
pub fn is_csv(raw: &str) -> bool { raw.trim().contains(',') }

/// Every non-empty entry in `raw`, in order, before any de-duplication.
///
/// Returns an empty list for input without a comma.
pub fn parse_entries(raw: &str) -> Vec<PastedEntry> {
  if !is_csv(raw) {
    return Vec::new();
  }
  raw
    .trim()
    .split(',')
    .map(str::trim)
    .filter(|entry| !entry.is_empty())
    .filter_map(parse::parse_entry)
    .collect()
}

/// The unique names in `raw` that are not already selected.
///
/// Names are de-duplicated ignoring case, keeping the first spelling seen.
/// A name is dropped when it equals, ignoring case, any of
/// `selected_names`. Order is first-seen order.
pub fn candidate_names<S: AsRef<str>>(
  raw: &str,
  selected_names: &[S],
) -> Vec<String> {
  let selected: Vec<String> = selected_names
    .iter()
    .map(|n| n.as_ref().trim().to_lowercase())
    .collect();

  let mut seen: Vec<String> = Vec::new();
  let mut names = Vec::new();

  for entry in parse_entries(raw) {
    let key = entry.name.to_lowercase();
    if seen.contains(&key) {
      continue;
    }
    seen.push(key.clone());
    if selected.contains(&key) {
      tracing::debug!(name = %entry.name, "pasted name already selected");
      continue;
    }
    names.push(entry.name);
  }

  names
}
