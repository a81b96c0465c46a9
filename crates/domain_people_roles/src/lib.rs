//! People and Roles Domain
//!
//! This crate implements the party add/edit/remove core of a
//! business-registration filing: a user edits a draft party (person or
//! organization) holding director, incorporator, and completing-party
//! roles, and the engine validates the draft, mediates the
//! single-completing-party conflict, and hands outcome events to the parent
//! list owner.
//!
//! # Flow
//!
//! Field and checkbox mutations go through [`PartyEditor`], which re-runs
//! the pure [`PartyValidator`] rule set once validation is latched.
//! Requesting the Completing Party role while another party holds it opens
//! a confirmation dialog; accepting defers the reassignment signal until
//! submission. `done`, `remove`, and `cancel` produce [`PartyEvent`]s - the
//! only values that cross the boundary.
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use filing_kernel::{EntityType, FilingContext, FilingType};
//! use domain_people_roles::{PartyEditor, PartyEvent, RoleType};
//!
//! let context = FilingContext::new(
//!     FilingType::IncorporationApplication,
//!     EntityType::BenefitCompany,
//!     NaiveDate::from_ymd_opt(2020, 3, 30).unwrap(),
//! );
//!
//! // Create mode: no list entry, no index, no existing completing party
//! let mut editor = PartyEditor::open(None, None, None, context);
//! editor.set_first_name("Adam");
//! editor.set_last_name("Smith");
//! editor.toggle_role(RoleType::Director).unwrap();
//!
//! // An incomplete draft emits nothing
//! assert!(editor.done().is_empty());
//! ```

pub mod address;
pub mod conflict;
pub mod editor;
pub mod error;
pub mod events;
pub mod form;
pub mod party;
pub mod validation;

pub use address::{Address, AddressField};
pub use conflict::{check_conflict, ConflictDecision, DialogState};
pub use editor::{PartyEditor, RoleToggle};
pub use error::PartyError;
pub use events::PartyEvent;
pub use form::{Checkbox, FormControls};
pub use party::{Officer, OrgPerson, PartyAction, PartyType, Role, RoleType};
pub use validation::{Field, FieldError, PartyValidation, PartyValidator};
