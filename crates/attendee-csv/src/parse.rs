//! Single-entry recognition.
//!
//! An entry is either a calendar invitee (`Name <address>`) or a bare name.

use crate::PastedEntry;

/// Recognise one trimmed, non-empty entry.
///
/// Returns `None` only for a calendar entry whose name part is blank.
pub(crate) fn parse_entry(entry: &str) -> Option<PastedEntry> {
  match split_calendar(entry) {
    Some((name, email)) if name.is_empty() => {
      tracing::debug!(%email, "dropping pasted address with no name");
      None
    }
    Some((name, email)) => Some(PastedEntry {
      name:  name.to_owned(),
      email: Some(email.to_owned()),
    }),
    None => Some(PastedEntry {
      name:  entry.to_owned(),
      email: None,
    }),
  }
}

/// Split `Name <address>` into its trimmed name and the address.
///
/// The name is everything before the earliest `<` that is followed by a
/// non-empty run without `>` up to the closing `>` at the end of the entry.
/// The name must be at least one character before trimming.
fn split_calendar(entry: &str) -> Option<(&str, &str)> {
  let body = entry.strip_suffix('>')?;
  body
    .match_indices('<')
    .filter(|(i, _)| *i > 0)
    .map(|(i, _)| (&body[..i], &body[i + 1..]))
    .find(|(_, email)| !email.is_empty() && !email.contains('>'))
    .map(|(name, email)| (name.trim(), email))
}
