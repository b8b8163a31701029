//! Line-oriented commands accepted on stdin.

use anyhow::{Result, bail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  /// Set the pending query and show what the dropdown would offer.
  Search(String),
  Toggle(String),
  Remove(String),
  Create(String),
  Paste(String),
  /// Press Enter on the pending query.
  Submit,
  /// Press Tab on the pending query.
  Accept,
  Total(String),
  Card(String),
  Show,
  Help,
  Quit,
}

pub const HELP: &str = "\
commands:
  search <text>    set the query and list matches
  toggle <id>      add or remove an attendee
  remove <id>      remove an attendee
  create <name>    create a custom attendee and add them
  paste <text>     import a comma-separated list of names
  submit           act on the current query as Enter would
  accept           act on the current query as Tab would
  total <amount>   set the expense total
  card <id>        show a person's profile card
  show             print the current state
  help             print this message
  quit             exit";

impl Command {
  /// Parse one input line. Blank lines yield `None`.
  pub fn parse(line: &str) -> Result<Option<Self>> {
    let line = line.trim();
    if line.is_empty() {
      return Ok(None);
    }
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let arg = rest.trim().to_owned();

    let needs_arg = |cmd: fn(String) -> Command| -> Result<Command> {
      if arg.is_empty() {
        bail!("`{verb}` needs an argument");
      }
      Ok(cmd(arg.clone()))
    };

    let cmd = match verb.to_ascii_lowercase().as_str() {
      // An empty query is meaningful: it lists everyone.
      "search" => Command::Search(arg.clone()),
      "toggle" => needs_arg(Command::Toggle)?,
      "remove" => needs_arg(Command::Remove)?,
      "create" => needs_arg(Command::Create)?,
      "paste" => needs_arg(Command::Paste)?,
      "total" => needs_arg(Command::Total)?,
      "card" => needs_arg(Command::Card)?,
      "submit" => Command::Submit,
      "accept" | "tab" => Command::Accept,
      "show" => Command::Show,
      "help" | "?" => Command::Help,
      "quit" | "exit" => Command::Quit,
      other => bail!("unknown command `{other}`; try `help`"),
    };
    Ok(Some(cmd))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_verbs_and_arguments() {
    assert_eq!(
      Command::parse("  toggle  2 ").unwrap(),
      Some(Command::Toggle("2".into()))
    );
    assert_eq!(
      Command::parse("paste Ann Lee <a@x.io>, Bob").unwrap(),
      Some(Command::Paste("Ann Lee <a@x.io>, Bob".into()))
    );
    assert_eq!(Command::parse("SUBMIT").unwrap(), Some(Command::Submit));
    assert_eq!(Command::parse("tab").unwrap(), Some(Command::Accept));
    assert_eq!(Command::parse("search").unwrap(), Some(Command::Search(String::new())));
  }

  #[test]
  fn blank_lines_are_skipped() {
    assert_eq!(Command::parse("   ").unwrap(), None);
  }

  #[test]
  fn rejects_unknown_verbs_and_missing_arguments() {
    assert!(Command::parse("dance").is_err());
    assert!(Command::parse("toggle").is_err());
    assert!(Command::parse("create   ").is_err());
  }
}
