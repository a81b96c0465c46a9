//! Party draft validation rules
//!
//! A pure rule set mapping a draft party to field-level validity and
//! messages. Results are plain values surfaced inline by the form; they are
//! never raised as errors and never cross the event boundary.
//!
//! # Rules
//!
//! - Person drafts require first and last name; organization drafts require
//!   an organization name.
//! - All name fields (first, middle, last, organization) are capped at 30
//!   characters and reject leading, trailing, or doubled interior
//!   whitespace.
//! - At least one role must be assigned.
//! - The mailing address is fully required; the delivery address only when
//!   it is not mirrored from the mailing address.
//!
//! Each field yields at most one message, in priority order
//! required > invalid spaces > length.

use crate::address::AddressField;
use crate::party::{OrgPerson, PartyType};

pub const MSG_FIRST_NAME_REQUIRED: &str = "A first name is required";
pub const MSG_LAST_NAME_REQUIRED: &str = "A last name is required";
pub const MSG_ORG_NAME_REQUIRED: &str = "An organization name is required";
pub const MSG_ROLE_REQUIRED: &str = "A role is required";
pub const MSG_FIELD_REQUIRED: &str = "This field is required";
pub const MSG_INVALID_SPACES: &str = "Invalid spaces";
pub const MSG_MAX_LENGTH: &str = "Cannot exceed 30 characters";

/// Maximum length of any name field
pub const MAX_NAME_LENGTH: usize = 30;

/// A field of the party form that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    MiddleName,
    LastName,
    OrganizationName,
    Roles,
    Mailing(AddressField),
    Delivery(AddressField),
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Result of validating a party draft
///
/// Errors are ordered: name fields first (first name before last name),
/// then roles, then addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartyValidation {
    errors: Vec<FieldError>,
}

impl PartyValidation {
    /// Creates a passing validation result
    pub fn ok() -> Self {
        Self::default()
    }

    /// Whether the draft passed every rule
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All failures, in display order
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// All failure messages, in display order
    pub fn messages(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.message).collect()
    }

    /// The message for a given field, if any
    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }

    fn add_error(&mut self, field: Field, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }
}

/// Checks for leading, trailing, or doubled interior whitespace
pub fn has_invalid_spaces(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    if value.starts_with(char::is_whitespace) || value.ends_with(char::is_whitespace) {
        return true;
    }
    let mut prev_was_space = false;
    for ch in value.chars() {
        let is_space = ch.is_whitespace();
        if is_space && prev_was_space {
            return true;
        }
        prev_was_space = is_space;
    }
    false
}

/// Validator for party drafts
pub struct PartyValidator;

impl PartyValidator {
    /// Validates a draft party
    ///
    /// `require_delivery_address` is set by the editor when the delivery
    /// address is not mirrored from the mailing address.
    pub fn validate(draft: &OrgPerson, require_delivery_address: bool) -> PartyValidation {
        let mut result = PartyValidation::ok();

        match draft.officer.party_type {
            PartyType::Person => {
                Self::validate_name(
                    &mut result,
                    Field::FirstName,
                    &draft.officer.first_name,
                    Some(MSG_FIRST_NAME_REQUIRED),
                );
                Self::validate_name(
                    &mut result,
                    Field::MiddleName,
                    draft.officer.middle_name.as_deref().unwrap_or(""),
                    None,
                );
                Self::validate_name(
                    &mut result,
                    Field::LastName,
                    &draft.officer.last_name,
                    Some(MSG_LAST_NAME_REQUIRED),
                );
            }
            PartyType::Organization => {
                Self::validate_name(
                    &mut result,
                    Field::OrganizationName,
                    draft.officer.organization_name.as_deref().unwrap_or(""),
                    Some(MSG_ORG_NAME_REQUIRED),
                );
            }
        }

        if draft.roles.is_empty() {
            result.add_error(Field::Roles, MSG_ROLE_REQUIRED);
        }

        for field in draft.mailing_address.missing_fields() {
            result.add_error(Field::Mailing(field), MSG_FIELD_REQUIRED);
        }

        if require_delivery_address {
            match &draft.delivery_address {
                Some(delivery) => {
                    for field in delivery.missing_fields() {
                        result.add_error(Field::Delivery(field), MSG_FIELD_REQUIRED);
                    }
                }
                None => {
                    result.add_error(Field::Delivery(AddressField::StreetAddress), MSG_FIELD_REQUIRED);
                }
            }
        }

        result
    }

    /// Applies the shared name rules to one field
    ///
    /// `required_message` is `None` for optional fields (middle name), which
    /// skip the required check but keep the space and length rules.
    fn validate_name(
        result: &mut PartyValidation,
        field: Field,
        value: &str,
        required_message: Option<&'static str>,
    ) {
        if value.trim().is_empty() {
            if let Some(message) = required_message {
                result.add_error(field, message);
            }
            return;
        }
        if has_invalid_spaces(value) {
            result.add_error(field, MSG_INVALID_SPACES);
            return;
        }
        if value.chars().count() > MAX_NAME_LENGTH {
            result.add_error(field, MSG_MAX_LENGTH);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;
    use crate::party::{OrgPerson, Role, RoleType};
    use chrono::NaiveDate;

    fn valid_person() -> OrgPerson {
        let mut party = OrgPerson::new_person();
        party.officer.first_name = "Adam".to_string();
        party.officer.middle_name = Some("D".to_string());
        party.officer.last_name = "Smith".to_string();
        party.roles.push(Role::new(
            RoleType::Director,
            NaiveDate::from_ymd_opt(2020, 3, 30).unwrap(),
        ));
        party.mailing_address = Address::new("123 Fake Street", "Victoria", "BC", "V8Z 5C6", "CA");
        party
    }

    #[test]
    fn test_valid_person_passes() {
        let result = PartyValidator::validate(&valid_person(), false);
        assert!(result.is_valid(), "errors: {:?}", result.errors());
    }

    #[test]
    fn test_missing_names_in_order() {
        let mut party = valid_person();
        party.officer.first_name = String::new();
        party.officer.middle_name = None;
        party.officer.last_name = String::new();

        let result = PartyValidator::validate(&party, false);
        assert!(!result.is_valid());
        assert_eq!(
            result.messages(),
            vec![MSG_FIRST_NAME_REQUIRED, MSG_LAST_NAME_REQUIRED]
        );
    }

    #[test]
    fn test_name_too_long() {
        let mut party = valid_person();
        let long = "1234567890123456789012345678901".to_string(); // 31 chars
        party.officer.first_name = long.clone();
        party.officer.middle_name = Some(long.clone());
        party.officer.last_name = long;

        let result = PartyValidator::validate(&party, false);
        assert_eq!(
            result.messages(),
            vec![MSG_MAX_LENGTH, MSG_MAX_LENGTH, MSG_MAX_LENGTH]
        );
    }

    #[test]
    fn test_name_at_cap_passes() {
        let mut party = valid_person();
        party.officer.first_name = "123456789012345678901234567890".to_string(); // 30 chars

        let result = PartyValidator::validate(&party, false);
        assert!(result.is_valid());
    }

    #[test]
    fn test_invalid_spaces() {
        assert!(has_invalid_spaces(" leading"));
        assert!(has_invalid_spaces("trailing "));
        assert!(has_invalid_spaces("doubled  interior"));
        assert!(!has_invalid_spaces("Adam Smith"));
        assert!(!has_invalid_spaces(""));

        let mut party = valid_person();
        party.officer.first_name = " Adam".to_string();
        let result = PartyValidator::validate(&party, false);
        assert_eq!(result.message_for(Field::FirstName), Some(MSG_INVALID_SPACES));
    }

    #[test]
    fn test_one_message_per_field() {
        // Leading space plus overlength: only the space message shows
        let mut party = valid_person();
        party.officer.first_name = format!(" {}", "a".repeat(31));

        let result = PartyValidator::validate(&party, false);
        assert_eq!(result.message_for(Field::FirstName), Some(MSG_INVALID_SPACES));
        assert_eq!(
            result
                .errors()
                .iter()
                .filter(|e| e.field == Field::FirstName)
                .count(),
            1
        );
    }

    #[test]
    fn test_org_name_rules() {
        let mut party = OrgPerson::new_organization();
        party.roles.push(Role::new(
            RoleType::Incorporator,
            NaiveDate::from_ymd_opt(2020, 3, 30).unwrap(),
        ));
        party.mailing_address = Address::new("3942 Fake Street", "Victoria", "BC", "V8Z 5C6", "CA");

        let result = PartyValidator::validate(&party, false);
        assert_eq!(
            result.message_for(Field::OrganizationName),
            Some(MSG_ORG_NAME_REQUIRED)
        );

        party.officer.organization_name = Some(" Invalid Org Name ".to_string());
        let result = PartyValidator::validate(&party, false);
        assert_eq!(
            result.message_for(Field::OrganizationName),
            Some(MSG_INVALID_SPACES)
        );

        party.officer.organization_name = Some("Valid Org Name".to_string());
        let result = PartyValidator::validate(&party, false);
        assert!(result.is_valid());
    }

    #[test]
    fn test_role_required() {
        let mut party = valid_person();
        party.roles.clear();

        let result = PartyValidator::validate(&party, false);
        assert_eq!(result.message_for(Field::Roles), Some(MSG_ROLE_REQUIRED));
    }

    #[test]
    fn test_mailing_address_required() {
        let mut party = valid_person();
        party.mailing_address = Address::empty();

        let result = PartyValidator::validate(&party, false);
        assert_eq!(
            result
                .errors()
                .iter()
                .filter(|e| matches!(e.field, Field::Mailing(_)))
                .count(),
            5
        );
        assert!(result
            .errors()
            .iter()
            .filter(|e| matches!(e.field, Field::Mailing(_)))
            .all(|e| e.message == MSG_FIELD_REQUIRED));
    }

    #[test]
    fn test_delivery_address_gated_by_flag() {
        let mut party = valid_person();
        party.delivery_address = None;

        let result = PartyValidator::validate(&party, false);
        assert!(result.is_valid());

        let result = PartyValidator::validate(&party, true);
        assert!(!result.is_valid());
        assert!(result
            .errors()
            .iter()
            .any(|e| matches!(e.field, Field::Delivery(_))));
    }
}
