//! Command dispatcher: applies one [`Command`] to the engine and renders the
//! result as JSON.

use attendee_core::avatar::{avatar_color, initials};
use attendee_engine::{SelectionEngine, compute_label};
use serde_json::{Value, json};

use crate::command::{Command, HELP};

pub struct App {
  pub engine: SelectionEngine,
  /// The expense total exactly as typed.
  pub total:  String,
}

impl App {
  pub fn new(engine: SelectionEngine, total: String) -> Self {
    Self { engine, total }
  }

  /// Apply `cmd`. Returns `None` when the session should end.
  pub fn handle(&mut self, cmd: Command) -> Option<Value> {
    let result = match cmd {
      Command::Quit => return None,
      Command::Help => json!({ "help": HELP }),
      Command::Show => Value::Null,
      Command::Search(query) => {
        self.engine.set_query(query.clone());
        self.affordances(&query)
      }
      Command::Toggle(id) => json!({ "change": self.engine.toggle(&id) }),
      Command::Remove(id) => json!({ "change": self.engine.remove(&id) }),
      Command::Create(name) => json!({ "created": self.engine.create_and_add(&name) }),
      Command::Paste(raw) => json!({ "imported": self.engine.import_csv(&raw) }),
      Command::Submit => json!({ "submitted": self.engine.submit() }),
      Command::Accept => json!({ "accepted": self.engine.accept() }),
      Command::Total(amount) => {
        self.total = amount;
        json!({ "total": self.total })
      }
      Command::Card(id) => json!({ "card": self.engine.profile_card(&id) }),
    };

    Some(json!({
      "result": result,
      "state": self.engine.snapshot(&self.total),
    }))
  }

  fn affordances(&self, query: &str) -> Value {
    let offer = self.engine.affordances(query);
    let selection = self.engine.selection();
    let results: Vec<Value> = offer
      .results
      .iter()
      .map(|p| {
        json!({
          "id": p.id,
          "label": compute_label(p, selection),
          "initials": initials(&p.full_name),
          "avatar_color": avatar_color(p.id.as_str()),
          "job_title": p.job_title,
        })
      })
      .collect();
    json!({
      "results": results,
      "completion": offer.completion,
      "offer_create": offer.offer_create,
      "csv_candidates": offer.csv_candidates,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn app() -> App { App::new(SelectionEngine::default(), "100".into()) }

  #[test]
  fn toggle_reports_change_and_state() {
    let mut app = app();
    let out = app.handle(Command::Toggle("2".into())).unwrap();
    assert_eq!(out["result"]["change"], "added");
    assert_eq!(out["state"]["selection"][1], "2");
    assert_eq!(out["state"]["per_person_cost"], "$50.00 per person");
  }

  #[test]
  fn search_lists_labelled_results() {
    let mut app = app();
    let out = app.handle(Command::Search("jor".into())).unwrap();
    assert_eq!(out["result"]["results"][0]["label"], "Jordan Alvarez");
    assert_eq!(out["result"]["completion"], "dan Alvarez");
    assert_eq!(out["state"]["query"], "jor");
  }

  #[test]
  fn total_updates_cost_helper() {
    let mut app = app();
    let out = app.handle(Command::Total("abc".into())).unwrap();
    assert!(out["state"]["per_person_cost"].is_null());
  }

  #[test]
  fn enter_creates_where_tab_completes() {
    let mut app = app();
    app.handle(Command::Search("Jor".into()));
    let out = app.handle(Command::Submit).unwrap();
    assert_eq!(out["result"]["submitted"]["action"], "created");
    assert_eq!(out["state"]["selection"][1], "custom-1000");

    app.handle(Command::Search("Jor".into()));
    let out = app.handle(Command::Accept).unwrap();
    assert_eq!(out["result"]["accepted"]["action"], "selected");
    assert_eq!(out["result"]["accepted"]["id"], "1");
  }

  #[test]
  fn quit_ends_session() {
    assert!(app().handle(Command::Quit).is_none());
  }
}
