//! Filing context - read-only session state shared with the domain cores
//!
//! The context captures what kind of filing is being prepared, for which
//! entity type, and the registry's notion of "today". Domain cores read it
//! to stamp appointment dates and to select entity-specific rules; they
//! never mutate it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The type of filing being prepared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilingType {
    /// Initial incorporation of a new entity
    IncorporationApplication,
    /// Correction of a previously submitted filing
    Correction,
    /// Change to an existing firm registration
    ChangeOfRegistration,
    /// Alteration of an entity's charter
    Alteration,
}

/// The legal entity type the filing applies to
///
/// Codes match the registry's entity type identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityType {
    /// Benefit company ("BEN")
    BenefitCompany,
    /// Cooperative association ("CP")
    Cooperative,
    /// General partnership ("GP")
    GeneralPartnership,
    /// Sole proprietorship ("SP")
    SoleProprietorship,
}

impl EntityType {
    /// Returns the registry code for this entity type
    pub fn code(&self) -> &'static str {
        match self {
            EntityType::BenefitCompany => "BEN",
            EntityType::Cooperative => "CP",
            EntityType::GeneralPartnership => "GP",
            EntityType::SoleProprietorship => "SP",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Read-only filing session context
///
/// Supplied by the enclosing application; domain cores treat it as
/// immutable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingContext {
    pub filing_type: FilingType,
    pub entity_type: EntityType,
    /// The registry's current date, used to stamp newly appointed roles
    pub current_date: NaiveDate,
}

impl FilingContext {
    /// Creates a new filing context
    pub fn new(filing_type: FilingType, entity_type: EntityType, current_date: NaiveDate) -> Self {
        Self {
            filing_type,
            entity_type,
            current_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_codes() {
        assert_eq!(EntityType::BenefitCompany.code(), "BEN");
        assert_eq!(EntityType::Cooperative.code(), "CP");
        assert_eq!(EntityType::GeneralPartnership.code(), "GP");
        assert_eq!(EntityType::SoleProprietorship.code(), "SP");
    }

    #[test]
    fn test_context_serialization() {
        let ctx = FilingContext::new(
            FilingType::Correction,
            EntityType::BenefitCompany,
            NaiveDate::from_ymd_opt(2020, 3, 30).unwrap(),
        );
        let json = serde_json::to_string(&ctx).unwrap();
        let back: FilingContext = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, back);
    }
}
