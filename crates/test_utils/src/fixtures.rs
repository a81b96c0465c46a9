//! Reference fixtures
//!
//! Fixed-value parties and context used throughout the suite. The data
//! mirrors the registry's reference filing: a correction for a benefit
//! company dated 2020-03-30.

use chrono::NaiveDate;

use domain_people_roles::{Address, OrgPerson, Role, RoleType};
use filing_kernel::{EntityType, FilingContext, FilingType, PartyId};

use crate::builders::OrgPersonBuilder;

/// The reference filing date used across fixtures
pub fn current_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 3, 30).unwrap()
}

/// A correction filing for a benefit company
pub fn correction_context() -> FilingContext {
    FilingContext::new(
        FilingType::Correction,
        EntityType::BenefitCompany,
        current_date(),
    )
}

/// The standard Victoria BC mailing address
pub fn bc_address() -> Address {
    Address::new("123 Fake Street", "Victoria", "BC", "V8Z 5C6", "CA")
}

/// A valid person holding Director and Completing Party roles
pub fn valid_person(id: PartyId) -> OrgPerson {
    OrgPersonBuilder::person()
        .with_id(id)
        .with_first_name("Adam")
        .with_middle_name("D")
        .with_last_name("Smith")
        .with_email("completing-party@example.com")
        .with_role(Role::new(RoleType::Director, current_date()))
        .with_role(Role::new(RoleType::CompletingParty, current_date()))
        .with_mailing_address(bc_address())
        .with_delivery_address(bc_address())
        .build()
}

/// A valid person holding only the Incorporator role
pub fn valid_incorporator(id: PartyId) -> OrgPerson {
    OrgPersonBuilder::person()
        .with_id(id)
        .with_first_name("Adam")
        .with_middle_name("D")
        .with_last_name("Smith")
        .with_role(Role::new(RoleType::Incorporator, current_date()))
        .with_mailing_address(bc_address())
        .with_delivery_address(bc_address())
        .build()
}

/// A valid organization incorporator
pub fn valid_org(id: PartyId) -> OrgPerson {
    OrgPersonBuilder::organization()
        .with_id(id)
        .with_organization_name("Test Org")
        .with_role(Role::new(RoleType::Incorporator, current_date()))
        .with_mailing_address(Address::new(
            "3942 Fake Street",
            "Victoria",
            "BC",
            "V8Z 5C6",
            "CA",
        ))
        .build()
}

/// An empty person draft, as a freshly opened create form
pub fn empty_person() -> OrgPerson {
    OrgPerson::new_person()
}
