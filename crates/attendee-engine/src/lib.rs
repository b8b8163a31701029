//! Attendee selection for expense forms.
//!
//! [`SelectionEngine`] owns the ordered attendee list for one form and
//! mediates every change to it: search, toggle, custom creation, and bulk
//! paste. The [`derive`] functions compute what the form shows (chip labels,
//! the per-person cost helper, name validity) from engine state on demand.

mod engine;
mod selection;

pub mod derive;
pub mod error;
pub mod settings;
pub mod view;

pub use derive::{
  Validity, compute_label, compute_per_person_cost, compute_validity,
};
pub use engine::{
  Affordances, ImportOutcome, SelectionChange, SelectionEngine, SubmitOutcome,
};
pub use error::{Error, Result};
pub use selection::Selection;
pub use settings::EngineSettings;
pub use view::{AttendeeView, EngineSnapshot, ProfileCard};
