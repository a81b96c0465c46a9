//! Test Utilities
//!
//! Shared builders, fixtures, and proptest strategies for the registration
//! filing test suite. Builders allow tests to specify only the relevant
//! fields; fixtures reproduce the well-known reference parties used across
//! the suite.

pub mod builders;
pub mod fixtures;
pub mod generators;

pub use builders::OrgPersonBuilder;
pub use fixtures::{
    bc_address, correction_context, empty_person, valid_incorporator, valid_org, valid_person,
};
