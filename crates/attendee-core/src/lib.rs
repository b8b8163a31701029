//! Core types for the attendee selection engine.
//!
//! This crate holds the people model and the session-scoped [`Directory`]
//! that search, import, and selection are built on. It performs no I/O.

pub mod avatar;
pub mod directory;
pub mod error;
pub mod person;
pub mod seed;

pub use directory::Directory;
pub use error::{Error, Result};
pub use person::{EmployeeType, PURCHASER_ID, Person, PersonId};
