//! The selection engine: one instance per open expense form.
//!
//! The engine owns its [`Directory`], so custom attendees created in one form
//! are invisible to every other form. Every operation is synchronous and
//! completes before the next user event is handled.

use attendee_core::{Directory, Person, PersonId};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
  derive::{self, Validity},
  error::Result,
  selection::Selection,
  settings::EngineSettings,
  view::{AttendeeView, EngineSnapshot, ProfileCard},
};

// ─── Outcomes ────────────────────────────────────────────────────────────────

/// What a toggle or remove did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionChange {
  Added,
  Removed,
  /// Removal refused: the id is the only attendee left.
  Guarded,
  /// Nothing to do (remove of an id that is not selected).
  Unchanged,
}

/// Result of a bulk paste.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportOutcome {
  pub added_count: usize,
  /// The people appended, in the order they were added.
  pub persons:     Vec<Person>,
}

/// What a keyboard action did with the pending query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SubmitOutcome {
  Imported(ImportOutcome),
  Selected { id: PersonId },
  Created { person: Person },
  Nothing,
}

/// What Enter or Tab could do with the pending query.
struct PendingActions {
  query:        String,
  import:       bool,
  offer_create: bool,
  /// First result, when a completion for it is showing.
  completed:    Option<PersonId>,
}

/// Dropdown state for one query. See [`SelectionEngine::affordances`].
#[derive(Debug, Clone, Serialize)]
pub struct Affordances<'a> {
  pub results:        Vec<&'a Person>,
  pub completion:     Option<String>,
  pub offer_create:   bool,
  pub csv_candidates: Vec<String>,
}

impl Affordances<'_> {
  pub fn offers_csv_import(&self) -> bool { !self.csv_candidates.is_empty() }
}

// ─── Engine ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SelectionEngine {
  directory: Directory,
  selection: Selection,
  query:     String,
  settings:  EngineSettings,
}

impl Default for SelectionEngine {
  fn default() -> Self {
    Self {
      directory: Directory::new(),
      selection: Selection::default(),
      query:     String::new(),
      settings:  EngineSettings::default(),
    }
  }
}

impl SelectionEngine {
  /// An engine over `directory` whose selection starts as just the
  /// purchaser.
  pub fn new(directory: Directory, settings: EngineSettings) -> Result<Self> {
    settings.validate()?;
    Ok(Self {
      directory,
      selection: Selection::default(),
      query: String::new(),
      settings,
    })
  }

  // ── Accessors ─────────────────────────────────────────────────────────────

  pub fn directory(&self) -> &Directory { &self.directory }

  pub fn selection(&self) -> &Selection { &self.selection }

  pub fn settings(&self) -> &EngineSettings { &self.settings }

  /// The pending search text.
  pub fn query(&self) -> &str { &self.query }

  pub fn set_query(&mut self, query: impl Into<String>) {
    self.query = query.into();
  }

  /// Selected people in selection order. Ids that do not resolve are
  /// skipped.
  pub fn selected_people(&self) -> Vec<&Person> {
    self
      .selection
      .ids()
      .iter()
      .filter_map(|id| self.directory.get_by_id(id.as_str()))
      .collect()
  }

  // ── Search ────────────────────────────────────────────────────────────────

  /// Unselected people matching `query`, capped at the result limit.
  pub fn search(&self, query: &str) -> Vec<&Person> {
    let exclude = self.selection.ids();
    let mut results = if query.trim().is_empty() {
      self.directory.get_all(exclude)
    } else {
      self.directory.search(query, exclude)
    };
    results.truncate(self.settings.result_limit);
    results
  }

  /// See [`derive::suggest_completion`].
  pub fn suggest_completion(query: &str, results: &[&Person]) -> Option<String> {
    derive::suggest_completion(query, results)
  }

  /// Whether to show "create new attendee" for `query`.
  ///
  /// Only when the query is not blank, the search came back with few
  /// results, and nobody already has exactly that name.
  pub fn should_offer_create(&self, query: &str, results: &[&Person]) -> bool {
    let query = query.trim();
    !query.is_empty()
      && results.len() <= self.settings.create_offer_threshold
      && !self.directory.exists(query)
  }

  // ── Selection changes ─────────────────────────────────────────────────────

  /// Remove `id` if selected, otherwise append it and clear the pending
  /// query.
  ///
  /// The last remaining attendee cannot be removed.
  pub fn toggle(&mut self, id: &str) -> SelectionChange {
    if self.selection.contains(id) {
      return self.remove(id);
    }

    if self.directory.get_by_id(id).is_none() {
      warn!(%id, "selecting an id the directory does not know");
    }
    self.selection.push(PersonId::from(id));
    self.query.clear();
    info!(%id, count = self.selection.len(), "attendee added");
    SelectionChange::Added
  }

  /// Remove `id` if selected. Never adds.
  pub fn remove(&mut self, id: &str) -> SelectionChange {
    if !self.selection.contains(id) {
      return SelectionChange::Unchanged;
    }
    if self.selection.len() == 1 {
      debug!(%id, "refusing to remove the only attendee");
      return SelectionChange::Guarded;
    }
    self.selection.remove(id);
    info!(%id, count = self.selection.len(), "attendee removed");
    SelectionChange::Removed
  }

  /// Create a custom attendee named `name` and select them.
  ///
  /// Does nothing for a blank name or one the directory already has.
  pub fn create_and_add(&mut self, name: &str) -> Option<Person> {
    let name = name.trim();
    if name.is_empty() || self.directory.exists(name) {
      debug!(%name, "create skipped: blank or existing name");
      return None;
    }
    let person = match self.directory.create_custom(name) {
      Ok(person) => person,
      Err(e) => {
        warn!(%name, error = %e, "could not create attendee");
        return None;
      }
    };
    self.toggle(person.id.as_str());
    Some(person)
  }

  /// Everything the dropdown offers for `query`: results, ghost text, and
  /// which of bulk import or single create to show. Never both.
  pub fn affordances(&self, query: &str) -> Affordances<'_> {
    let results = self.search(query);
    let csv_candidates = self.csv_candidates(query);
    let completion = derive::suggest_completion(query, &results);
    let offer_create =
      csv_candidates.is_empty() && self.should_offer_create(query, &results);
    Affordances {
      results,
      completion,
      offer_create,
      csv_candidates,
    }
  }

  // ── Bulk paste ────────────────────────────────────────────────────────────

  /// Names in `raw` that a paste would add, in paste order.
  pub fn csv_candidates(&self, raw: &str) -> Vec<String> {
    let selected: Vec<&str> = self
      .selected_people()
      .into_iter()
      .map(|p| p.full_name.as_str())
      .collect();
    attendee_csv::candidate_names(raw, &selected)
  }

  /// Whether `raw` is a multi-person paste with something to add. While
  /// this holds, the single-name create option must stay hidden.
  pub fn should_offer_csv_import(&self, raw: &str) -> bool {
    !self.csv_candidates(raw).is_empty()
  }

  /// Add everyone named in `raw`.
  ///
  /// Known names resolve to their directory entry; unknown names become
  /// custom attendees. People are appended in paste order.
  pub fn import_csv(&mut self, raw: &str) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();

    for name in self.csv_candidates(raw) {
      let existing = self.directory.find_by_name(&name).cloned();
      let person = match existing {
        Some(person) => person,
        None => match self.directory.create_custom(&name) {
          Ok(person) => person,
          Err(e) => {
            warn!(%name, error = %e, "skipping pasted name");
            continue;
          }
        },
      };

      if self.selection.push(person.id.clone()) {
        outcome.persons.push(person);
      }
    }

    outcome.added_count = outcome.persons.len();
    if outcome.added_count > 0 {
      self.query.clear();
      info!(added = outcome.added_count, "imported pasted attendees");
    }
    outcome
  }

  // ── Keyboard actions ──────────────────────────────────────────────────────

  /// Act on the pending query the way pressing Enter does.
  ///
  /// In order: import a multi-person paste; create a new attendee when
  /// offered; select the first result when a completion is showing.
  pub fn submit(&mut self) -> SubmitOutcome {
    let pending = self.pending_actions();
    if pending.import {
      return SubmitOutcome::Imported(self.import_csv(&pending.query));
    }
    if let Some(outcome) = self.try_create(&pending) {
      return outcome;
    }
    self.try_accept(pending).unwrap_or(SubmitOutcome::Nothing)
  }

  /// Act on the pending query the way pressing Tab does.
  ///
  /// Like [`submit`](Self::submit), but a showing completion wins over
  /// creating a new attendee.
  pub fn accept(&mut self) -> SubmitOutcome {
    let pending = self.pending_actions();
    if pending.import {
      return SubmitOutcome::Imported(self.import_csv(&pending.query));
    }
    let outcome = if pending.completed.is_some() {
      self.try_accept(pending)
    } else {
      self.try_create(&pending)
    };
    outcome.unwrap_or(SubmitOutcome::Nothing)
  }

  fn pending_actions(&self) -> PendingActions {
    let query = self.query.clone();
    let offer = self.affordances(&query);
    let completed = offer
      .completion
      .as_ref()
      .and(offer.results.first())
      .map(|p| p.id.clone());
    PendingActions {
      import: offer.offers_csv_import(),
      offer_create: offer.offer_create,
      completed,
      query,
    }
  }

  fn try_create(&mut self, pending: &PendingActions) -> Option<SubmitOutcome> {
    if !pending.offer_create {
      return None;
    }
    self
      .create_and_add(&pending.query)
      .map(|person| SubmitOutcome::Created { person })
  }

  fn try_accept(&mut self, pending: PendingActions) -> Option<SubmitOutcome> {
    let id = pending.completed?;
    self.toggle(id.as_str());
    Some(SubmitOutcome::Selected { id })
  }

  // ── Render models ─────────────────────────────────────────────────────────

  /// Per-chip render data in selection order.
  pub fn attendee_views(&self) -> Vec<AttendeeView> {
    let sole = self.selection.len() == 1;
    self
      .selected_people()
      .into_iter()
      .map(|person| AttendeeView::new(person, &self.selection, !sole))
      .collect()
  }

  /// Attendees whose names need fixing, with the message to show.
  pub fn invalid_attendees(&self) -> Vec<(&Person, Validity)> {
    self
      .selected_people()
      .into_iter()
      .map(|person| (person, derive::compute_validity(person)))
      .filter(|(_, validity)| !validity.is_valid())
      .collect()
  }

  /// Hover-card data for `id`.
  pub fn profile_card(&self, id: &str) -> Option<ProfileCard> {
    let person = self.directory.get_by_id(id)?;
    let manager_id = person
      .manager
      .as_deref()
      .and_then(|name| self.directory.find_by_name(name))
      .map(|manager| manager.id.clone());
    Some(ProfileCard::new(person, manager_id))
  }

  /// Everything the form needs to render the attendee field.
  pub fn snapshot(&self, total_amount: &str) -> EngineSnapshot {
    EngineSnapshot {
      selection:       self.selection.clone(),
      attendees:       self.attendee_views(),
      per_person_cost: derive::compute_per_person_cost(
        total_amount,
        &self.selection,
      ),
      query:           self.query.clone(),
    }
  }
}
