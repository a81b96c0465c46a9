//! Filing Kernel - Foundational types for the registration filing system
//!
//! This crate provides the fundamental building blocks used across all domain
//! modules:
//! - Strongly-typed identifiers for filing entities
//! - The read-only filing context (filing type, entity type, current date)

pub mod context;
pub mod identifiers;

pub use context::{EntityType, FilingContext, FilingType};
pub use identifiers::PartyId;
