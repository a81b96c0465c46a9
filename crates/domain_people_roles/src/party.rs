//! Party data model for filing drafts
//!
//! A party is a person or organization appearing in a registration filing
//! with one or more roles. The same shape serves both as the mutable draft
//! edited by [`crate::editor::PartyEditor`] and as each committed entry in
//! the parent's party list.
//!
//! # Invariants
//!
//! - Exactly one of {first/last name} vs {organization name} is populated,
//!   determined by `party_type`; the unused branch stays empty.
//! - `roles` holds at most one entry per [`RoleType`].
//! - An organization may only ever hold the Incorporator role.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use filing_kernel::PartyId;

use crate::address::Address;

/// Whether a party is a natural person or a legal entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyType {
    Person,
    Organization,
}

/// The closed set of roles a party may hold in a filing
///
/// Serialized with the registry's wire spellings ("Completing Party" etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleType {
    /// The single party responsible for completing and submitting the filing
    #[serde(rename = "Completing Party")]
    CompletingParty,
    Incorporator,
    Director,
}

impl RoleType {
    /// Returns the registry's display label for this role
    pub fn label(&self) -> &'static str {
        match self {
            RoleType::CompletingParty => "Completing Party",
            RoleType::Incorporator => "Incorporator",
            RoleType::Director => "Director",
        }
    }
}

impl std::fmt::Display for RoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A role held by a party, with its appointment period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "roleType")]
    pub role_type: RoleType,
    #[serde(rename = "appointmentDate")]
    pub appointment_date: NaiveDate,
    #[serde(rename = "cessationDate", skip_serializing_if = "Option::is_none")]
    pub cessation_date: Option<NaiveDate>,
}

impl Role {
    /// Creates a role appointed on the given date with no cessation
    pub fn new(role_type: RoleType, appointment_date: NaiveDate) -> Self {
        Self {
            role_type,
            appointment_date,
            cessation_date: None,
        }
    }
}

/// Pending change markers used by the containing list for diffing
///
/// This core transports them opaquely; it never stamps or interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartyAction {
    Added,
    Edited,
    Removed,
    NameChanged,
    AddressChanged,
}

/// Identity block of a party
///
/// Name fields carry the registry's 30-character cap; the declarative
/// constraints here back up the bespoke rule set in
/// [`crate::validation::PartyValidator`], which owns the exact messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Officer {
    /// Stable identifier; `None` until the parent list assigns one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PartyId>,
    #[serde(rename = "partyType")]
    pub party_type: PartyType,
    #[serde(rename = "firstName")]
    #[validate(length(max = 30, message = "Cannot exceed 30 characters"))]
    pub first_name: String,
    #[serde(rename = "middleName", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 30, message = "Cannot exceed 30 characters"))]
    pub middle_name: Option<String>,
    #[serde(rename = "lastName")]
    #[validate(length(max = 30, message = "Cannot exceed 30 characters"))]
    pub last_name: String,
    #[serde(rename = "organizationName", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 30, message = "Cannot exceed 30 characters"))]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
    /// Business registry number, for organizations already on the register
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(rename = "taxId", skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

impl Officer {
    /// Creates an empty person identity block
    pub fn empty_person() -> Self {
        Self {
            id: None,
            party_type: PartyType::Person,
            first_name: String::new(),
            middle_name: None,
            last_name: String::new(),
            organization_name: None,
            email: None,
            identifier: None,
            tax_id: None,
        }
    }

    /// Creates an empty organization identity block
    pub fn empty_organization() -> Self {
        Self {
            party_type: PartyType::Organization,
            ..Self::empty_person()
        }
    }

    /// Checks whether two identity blocks refer to the same party
    ///
    /// Identity is carried by the stable id; drafts without an id never
    /// match anything.
    pub fn same_identity(&self, other: &Officer) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}

/// A party (person or organization) in a filing, with its roles and addresses
///
/// This is both the draft shape owned by the editor and the committed shape
/// delivered through [`crate::events::PartyEvent::AddEdit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgPerson {
    pub officer: Officer,
    pub roles: Vec<Role>,
    #[serde(rename = "mailingAddress")]
    pub mailing_address: Address,
    #[serde(rename = "deliveryAddress", skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<PartyAction>,
    /// Party-level appointment date, for single-role simplified views
    #[serde(rename = "appointmentDate", skip_serializing_if = "Option::is_none")]
    pub appointment_date: Option<NaiveDate>,
    #[serde(rename = "cessationDate", skip_serializing_if = "Option::is_none")]
    pub cessation_date: Option<NaiveDate>,
    /// Set when a committed identity's name changed and needs confirmation
    #[serde(rename = "confirmNameChange", skip_serializing_if = "Option::is_none")]
    pub confirm_name_change: Option<bool>,
}

impl OrgPerson {
    /// Creates an empty person draft template
    pub fn new_person() -> Self {
        Self {
            officer: Officer::empty_person(),
            roles: Vec::new(),
            mailing_address: Address::empty(),
            delivery_address: None,
            actions: Vec::new(),
            appointment_date: None,
            cessation_date: None,
            confirm_name_change: None,
        }
    }

    /// Creates an empty organization draft template
    pub fn new_organization() -> Self {
        Self {
            officer: Officer::empty_organization(),
            ..Self::new_person()
        }
    }

    /// Checks whether this party holds the given role
    pub fn has_role(&self, role_type: RoleType) -> bool {
        self.roles.iter().any(|r| r.role_type == role_type)
    }

    /// Returns the role entry of the given type, if held
    pub fn role(&self, role_type: RoleType) -> Option<&Role> {
        self.roles.iter().find(|r| r.role_type == role_type)
    }

    /// Checks whether this party is a natural person
    pub fn is_person(&self) -> bool {
        self.officer.party_type == PartyType::Person
    }

    /// Checks whether this party is an organization
    pub fn is_organization(&self) -> bool {
        self.officer.party_type == PartyType::Organization
    }

    /// Returns a display name for this party
    pub fn display_name(&self) -> String {
        match self.officer.party_type {
            PartyType::Person => {
                let mut parts: Vec<&str> = Vec::new();
                if !self.officer.first_name.is_empty() {
                    parts.push(&self.officer.first_name);
                }
                if let Some(middle) = &self.officer.middle_name {
                    if !middle.is_empty() {
                        parts.push(middle);
                    }
                }
                if !self.officer.last_name.is_empty() {
                    parts.push(&self.officer.last_name);
                }
                parts.join(" ")
            }
            PartyType::Organization => self
                .officer
                .organization_name
                .clone()
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filing_kernel::PartyId;

    #[test]
    fn test_role_type_wire_format() {
        let json = serde_json::to_string(&RoleType::CompletingParty).unwrap();
        assert_eq!(json, "\"Completing Party\"");

        let back: RoleType = serde_json::from_str("\"Director\"").unwrap();
        assert_eq!(back, RoleType::Director);
    }

    #[test]
    fn test_party_type_wire_format() {
        assert_eq!(serde_json::to_string(&PartyType::Person).unwrap(), "\"person\"");
        assert_eq!(
            serde_json::to_string(&PartyType::Organization).unwrap(),
            "\"organization\""
        );
    }

    #[test]
    fn test_same_identity_requires_ids() {
        let id = PartyId::new_v7();
        let mut a = Officer::empty_person();
        let mut b = Officer::empty_person();

        // Two drafts without ids are never the same party
        assert!(!a.same_identity(&b));

        a.id = Some(id);
        b.id = Some(id);
        assert!(a.same_identity(&b));

        b.id = Some(PartyId::new_v7());
        assert!(!a.same_identity(&b));
    }

    #[test]
    fn test_has_role() {
        let mut party = OrgPerson::new_person();
        let date = chrono::NaiveDate::from_ymd_opt(2020, 3, 30).unwrap();
        party.roles.push(Role::new(RoleType::Director, date));

        assert!(party.has_role(RoleType::Director));
        assert!(!party.has_role(RoleType::CompletingParty));
        assert_eq!(party.role(RoleType::Director).unwrap().appointment_date, date);
    }

    #[test]
    fn test_display_name() {
        let mut person = OrgPerson::new_person();
        person.officer.first_name = "Adam".to_string();
        person.officer.middle_name = Some("D".to_string());
        person.officer.last_name = "Smith".to_string();
        assert_eq!(person.display_name(), "Adam D Smith");

        let mut org = OrgPerson::new_organization();
        org.officer.organization_name = Some("Test Org".to_string());
        assert_eq!(org.display_name(), "Test Org");
    }

    #[test]
    fn test_org_person_round_trip() {
        let mut party = OrgPerson::new_person();
        party.officer.first_name = "Adam".to_string();
        party.officer.last_name = "Smith".to_string();
        party.roles.push(Role::new(
            RoleType::CompletingParty,
            chrono::NaiveDate::from_ymd_opt(2020, 3, 30).unwrap(),
        ));

        let json = serde_json::to_string(&party).unwrap();
        assert!(json.contains("\"roleType\":\"Completing Party\""));

        let back: OrgPerson = serde_json::from_str(&json).unwrap();
        assert_eq!(back, party);
    }
}
