//! Test Data Builders
//!
//! Builder patterns for constructing test parties with sensible defaults.
//! Tests specify only the fields they care about.

use domain_people_roles::{Address, OrgPerson, PartyType, Role};
use filing_kernel::PartyId;

/// Builder for constructing test parties
pub struct OrgPersonBuilder {
    party: OrgPerson,
}

impl OrgPersonBuilder {
    /// Creates a builder for an empty person draft
    pub fn person() -> Self {
        Self {
            party: OrgPerson::new_person(),
        }
    }

    /// Creates a builder for an empty organization draft
    pub fn organization() -> Self {
        Self {
            party: OrgPerson::new_organization(),
        }
    }

    /// Sets the stable party identifier
    pub fn with_id(mut self, id: PartyId) -> Self {
        self.party.officer.id = Some(id);
        self
    }

    /// Sets the party type
    pub fn with_party_type(mut self, party_type: PartyType) -> Self {
        self.party.officer.party_type = party_type;
        self
    }

    /// Sets the first name
    pub fn with_first_name(mut self, name: impl Into<String>) -> Self {
        self.party.officer.first_name = name.into();
        self
    }

    /// Sets the middle name
    pub fn with_middle_name(mut self, name: impl Into<String>) -> Self {
        self.party.officer.middle_name = Some(name.into());
        self
    }

    /// Sets the last name
    pub fn with_last_name(mut self, name: impl Into<String>) -> Self {
        self.party.officer.last_name = name.into();
        self
    }

    /// Sets the organization name
    pub fn with_organization_name(mut self, name: impl Into<String>) -> Self {
        self.party.officer.organization_name = Some(name.into());
        self
    }

    /// Sets the contact email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.party.officer.email = Some(email.into());
        self
    }

    /// Adds a role
    pub fn with_role(mut self, role: Role) -> Self {
        self.party.roles.push(role);
        self
    }

    /// Sets the mailing address
    pub fn with_mailing_address(mut self, address: Address) -> Self {
        self.party.mailing_address = address;
        self
    }

    /// Sets the delivery address
    pub fn with_delivery_address(mut self, address: Address) -> Self {
        self.party.delivery_address = Some(address);
        self
    }

    /// Builds the party
    pub fn build(self) -> OrgPerson {
        self.party
    }
}
