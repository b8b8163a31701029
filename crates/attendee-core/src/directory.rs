//! The people directory: a fixed seed roster plus session-created custom
//! attendees.
//!
//! The seed list never changes after construction. Custom people are only
//! ever appended, and their ids come from a counter that never rewinds, so an
//! id handed out once is never handed out again. Removing an attendee from a
//! selection does not touch the directory.

use std::collections::HashSet;

use tracing::debug;

use crate::{
  error::{Error, Result},
  person::{EmployeeType, Person, PersonId},
  seed,
};

/// First number used for `custom-<N>` ids.
pub const FIRST_CUSTOM_ID: u64 = 1000;

/// Domain appended to synthesised custom-attendee addresses.
pub const CUSTOM_EMAIL_DOMAIN: &str = "company.com";

#[derive(Debug, Clone)]
pub struct Directory {
  seed:           Vec<Person>,
  custom:         Vec<Person>,
  next_custom_id: u64,
}

impl Default for Directory {
  fn default() -> Self { Self::new() }
}

impl Directory {
  /// A directory over the built-in roster.
  pub fn new() -> Self {
    Self {
      seed:           seed::default_people(),
      custom:         Vec::new(),
      next_custom_id: FIRST_CUSTOM_ID,
    }
  }

  /// A directory over a caller-supplied roster.
  ///
  /// The roster must have unique ids and non-blank names, contain the
  /// [`PURCHASER_ID`](crate::PURCHASER_ID) record flagged as purchaser, and
  /// flag nobody else as purchaser or custom.
  pub fn from_seed(people: Vec<Person>) -> Result<Self> {
    let mut seen = HashSet::new();
    let mut has_purchaser = false;

    for person in &people {
      if !seen.insert(person.id.clone()) {
        return Err(Error::DuplicateId(person.id.clone()));
      }
      if person.full_name.trim().is_empty() {
        return Err(Error::BlankName(person.id.clone()));
      }
      if person.is_custom {
        return Err(Error::CustomInSeed(person.id.clone()));
      }
      match (person.id.is_purchaser(), person.is_purchaser) {
        (true, true) => has_purchaser = true,
        (true, false) => return Err(Error::MissingPurchaser),
        (false, true) => {
          return Err(Error::MisplacedPurchaser(person.id.clone()));
        }
        (false, false) => {}
      }
    }

    if !has_purchaser {
      return Err(Error::MissingPurchaser);
    }

    Ok(Self {
      seed:           people,
      custom:         Vec::new(),
      next_custom_id: FIRST_CUSTOM_ID,
    })
  }

  /// Parse a JSON array of [`Person`] records and validate it as a seed.
  pub fn from_json(json: &str) -> Result<Self> {
    let people: Vec<Person> = serde_json::from_str(json)?;
    Self::from_seed(people)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  /// Everyone, seed first, then custom people in creation order.
  pub fn iter(&self) -> impl Iterator<Item = &Person> {
    self.seed.iter().chain(self.custom.iter())
  }

  pub fn len(&self) -> usize { self.seed.len() + self.custom.len() }

  pub fn is_empty(&self) -> bool { self.len() == 0 }

  /// People created during this session, oldest first.
  pub fn custom_people(&self) -> &[Person] { &self.custom }

  pub fn get_by_id(&self, id: &str) -> Option<&Person> {
    self.iter().find(|p| p.id == id)
  }

  /// Everyone whose id is not in `exclude`.
  pub fn get_all(&self, exclude: &[PersonId]) -> Vec<&Person> {
    self.iter().filter(|p| !exclude.contains(&p.id)).collect()
  }

  /// Case-insensitive substring search over name, job title, email and
  /// department, in directory order. A blank query lists everyone not
  /// excluded. Results are not truncated.
  pub fn search(&self, query: &str, exclude: &[PersonId]) -> Vec<&Person> {
    if query.trim().is_empty() {
      return self.get_all(exclude);
    }
    let needle = query.to_lowercase();
    self
      .iter()
      .filter(|p| !exclude.contains(&p.id))
      .filter(|p| p.matches(&needle))
      .collect()
  }

  /// Whether anyone's full name equals the trimmed `full_name`, ignoring
  /// case.
  pub fn exists(&self, full_name: &str) -> bool {
    self.find_by_name(full_name).is_some()
  }

  /// The first person, in directory order, whose full name equals the
  /// trimmed `full_name` ignoring case.
  pub fn find_by_name(&self, full_name: &str) -> Option<&Person> {
    self.iter().find(|p| p.has_name(full_name))
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  /// Create and append an ad-hoc attendee.
  ///
  /// Not idempotent: two calls with the same name yield two people with
  /// distinct ids. Callers dedupe by name first.
  pub fn create_custom(&mut self, full_name: &str) -> Result<Person> {
    let name = full_name.trim();
    if name.is_empty() {
      return Err(Error::InvalidName);
    }

    let id = PersonId::new(format!("custom-{}", self.next_custom_id));
    self.next_custom_id += 1;

    let person = Person {
      job_title: Some("Custom attendee".to_owned()),
      email: Some(synthesize_email(name)),
      department: Some("Custom".to_owned()),
      work_location: Some("Remote".to_owned()),
      manager: Some("TBD".to_owned()),
      tenure: Some("New".to_owned()),
      employee_type: Some(EmployeeType::Employee),
      is_custom: true,
      ..Person::new(id, name)
    };

    debug!(id = %person.id, name = %person.full_name, "created custom attendee");
    self.custom.push(person.clone());
    Ok(person)
  }
}

/// `"Mary Ann  Smith"` → `"mary.ann.smith@company.com"`.
fn synthesize_email(name: &str) -> String {
  let local = name
    .to_lowercase()
    .split_whitespace()
    .collect::<Vec<_>>()
    .join(".");
  format!("{local}@{CUSTOM_EMAIL_DOMAIN}")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::person::PURCHASER_ID;

  fn ids(people: &[&Person]) -> Vec<String> {
    people.iter().map(|p| p.id.to_string()).collect()
  }

  // ─── Search ───────────────────────────────────────────────────────────────

  #[test]
  fn blank_query_lists_everyone_not_excluded() {
    let dir = Directory::new();
    let exclude = [PersonId::purchaser()];
    let all = dir.search("   ", &exclude);
    assert_eq!(all.len(), dir.len() - 1);
    assert_eq!(all[0].id, "1");
  }

  #[test]
  fn search_is_case_insensitive_and_spans_fields() {
    let dir = Directory::new();
    let by_name = dir.search("ALEXANDRA", &[]);
    assert_eq!(ids(&by_name), ["2"]);

    // Everyone in the Design department.
    let design = dir.search("design", &[]);
    assert_eq!(ids(&design), ["3", "8", "24", "28"]);
  }

  #[test]
  fn search_keeps_directory_order_and_excludes() {
    let dir = Directory::new();
    let exclude = [PersonId::from("7")];
    let hits = dir.search("devops", &exclude);
    assert!(hits.is_empty());

    let hits = dir.search("engineer", &[]);
    let got = ids(&hits);
    let mut sorted = got.clone();
    sorted.sort_by_key(|id| id.parse::<u32>().unwrap_or(0));
    assert_eq!(got, sorted);
  }

  #[test]
  fn custom_people_follow_seed_in_results() {
    let mut dir = Directory::new();
    dir.create_custom("Alex Stranger").unwrap();
    let hits = dir.search("alex", &[]);
    assert_eq!(ids(&hits), ["2", "custom-1000"]);
  }

  // ─── Lookup ───────────────────────────────────────────────────────────────

  #[test]
  fn exists_matches_trimmed_name_exactly() {
    let dir = Directory::new();
    assert!(dir.exists(" jordan ALVAREZ "));
    assert!(!dir.exists("Jordan"));
    assert!(!dir.exists(""));
  }

  #[test]
  fn get_by_id_sees_custom_people() {
    let mut dir = Directory::new();
    let bob = dir.create_custom("Bob Vance").unwrap();
    assert_eq!(dir.get_by_id("custom-1000"), Some(&bob));
    assert!(dir.get_by_id("custom-1001").is_none());
  }

  // ─── Custom attendees ─────────────────────────────────────────────────────

  #[test]
  fn create_custom_fills_placeholders() {
    let mut dir = Directory::new();
    let p = dir.create_custom("  Mary Ann   Smith ").unwrap();
    assert_eq!(p.id, "custom-1000");
    assert_eq!(p.full_name, "Mary Ann   Smith");
    assert_eq!(p.email.as_deref(), Some("mary.ann.smith@company.com"));
    assert_eq!(p.job_title.as_deref(), Some("Custom attendee"));
    assert_eq!(p.department.as_deref(), Some("Custom"));
    assert!(p.is_custom);
    assert!(!p.is_purchaser);
  }

  #[test]
  fn create_custom_is_not_idempotent() {
    let mut dir = Directory::new();
    let a = dir.create_custom("Bob").unwrap();
    let b = dir.create_custom("Bob").unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(b.id, "custom-1001");
    assert_eq!(dir.custom_people().len(), 2);
  }

  #[test]
  fn create_custom_rejects_blank_names() {
    let mut dir = Directory::new();
    assert!(matches!(dir.create_custom("  \t"), Err(Error::InvalidName)));
    // A rejected call does not consume an id.
    assert_eq!(dir.create_custom("Bob").unwrap().id, "custom-1000");
  }

  #[test]
  fn directories_do_not_share_custom_namespace() {
    let mut a = Directory::new();
    let b = Directory::new();
    a.create_custom("Only In A").unwrap();
    assert!(a.exists("only in a"));
    assert!(!b.exists("only in a"));
  }

  // ─── Seed validation ──────────────────────────────────────────────────────

  fn purchaser() -> Person {
    Person {
      is_purchaser: true,
      ..Person::new(PURCHASER_ID, "Pat Payer")
    }
  }

  #[test]
  fn from_seed_accepts_minimal_roster() {
    let dir =
      Directory::from_seed(vec![purchaser(), Person::new("a", "Ann Lee")])
        .unwrap();
    assert_eq!(dir.len(), 2);
  }

  #[test]
  fn from_seed_rejects_bad_rosters() {
    let dup = Directory::from_seed(vec![
      purchaser(),
      Person::new("a", "Ann Lee"),
      Person::new("a", "Ann Other"),
    ]);
    assert!(matches!(dup, Err(Error::DuplicateId(id)) if id == "a"));

    let blank =
      Directory::from_seed(vec![purchaser(), Person::new("b", "  ")]);
    assert!(matches!(blank, Err(Error::BlankName(_))));

    let none = Directory::from_seed(vec![Person::new("a", "Ann Lee")]);
    assert!(matches!(none, Err(Error::MissingPurchaser)));

    let stray = Directory::from_seed(vec![purchaser(), Person {
      is_purchaser: true,
      ..Person::new("x", "Not Payer")
    }]);
    assert!(matches!(stray, Err(Error::MisplacedPurchaser(_))));

    let custom = Directory::from_seed(vec![purchaser(), Person {
      is_custom: true,
      ..Person::new("c", "Cee Dee")
    }]);
    assert!(matches!(custom, Err(Error::CustomInSeed(_))));
  }

  #[test]
  fn from_json_reads_person_records() {
    let json = r#"[
      {"id": "purchaser-lando-norris", "full_name": "Lando Norris", "is_purchaser": true},
      {"id": "7", "full_name": "James Mitchell", "employee_type": "Contractor"}
    ]"#;
    let dir = Directory::from_json(json).unwrap();
    let james = dir.get_by_id("7").unwrap();
    assert_eq!(james.employee_type, Some(EmployeeType::Contractor));
    assert!(matches!(Directory::from_json("{"), Err(Error::Json(_))));
  }
}
