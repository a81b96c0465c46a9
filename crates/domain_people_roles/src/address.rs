//! Postal address types
//!
//! The address widgets that feed these values enforce their own input
//! formats; this core only needs to know which required subfields are still
//! empty when gating submission.

use serde::{Deserialize, Serialize};

/// Required subfields of a postal address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressField {
    StreetAddress,
    City,
    Region,
    PostalCode,
    Country,
}

/// A postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "streetAddress")]
    pub street_address: String,
    #[serde(rename = "streetAddressAdditional", default)]
    pub street_additional: String,
    #[serde(rename = "addressCity")]
    pub city: String,
    #[serde(rename = "addressRegion")]
    pub region: String,
    #[serde(rename = "postalCode")]
    pub postal_code: String,
    #[serde(rename = "addressCountry")]
    pub country: String,
    #[serde(rename = "deliveryInstructions", default, skip_serializing_if = "String::is_empty")]
    pub delivery_instructions: String,
}

impl Address {
    /// Creates an address with all fields empty
    pub fn empty() -> Self {
        Self {
            street_address: String::new(),
            street_additional: String::new(),
            city: String::new(),
            region: String::new(),
            postal_code: String::new(),
            country: String::new(),
            delivery_instructions: String::new(),
        }
    }

    /// Creates an address from its required fields
    pub fn new(
        street_address: impl Into<String>,
        city: impl Into<String>,
        region: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street_address: street_address.into(),
            city: city.into(),
            region: region.into(),
            postal_code: postal_code.into(),
            country: country.into(),
            ..Self::empty()
        }
    }

    /// Checks whether every field is empty
    pub fn is_empty(&self) -> bool {
        self.street_address.is_empty()
            && self.street_additional.is_empty()
            && self.city.is_empty()
            && self.region.is_empty()
            && self.postal_code.is_empty()
            && self.country.is_empty()
            && self.delivery_instructions.is_empty()
    }

    /// Returns the required subfields that are still blank
    pub fn missing_fields(&self) -> Vec<AddressField> {
        let mut missing = Vec::new();
        if self.street_address.trim().is_empty() {
            missing.push(AddressField::StreetAddress);
        }
        if self.city.trim().is_empty() {
            missing.push(AddressField::City);
        }
        if self.region.trim().is_empty() {
            missing.push(AddressField::Region);
        }
        if self.postal_code.trim().is_empty() {
            missing.push(AddressField::PostalCode);
        }
        if self.country.trim().is_empty() {
            missing.push(AddressField::Country);
        }
        missing
    }

    /// Checks whether all required subfields are populated
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_address() {
        let address = Address::empty();
        assert!(address.is_empty());
        assert!(!address.is_complete());
        assert_eq!(address.missing_fields().len(), 5);
    }

    #[test]
    fn test_complete_address() {
        let address = Address::new("123 Fake Street", "Victoria", "BC", "V8Z 5C6", "CA");
        assert!(address.is_complete());
        assert!(address.missing_fields().is_empty());
    }

    #[test]
    fn test_partial_address() {
        let mut address = Address::new("123 Fake Street", "Victoria", "BC", "V8Z 5C6", "CA");
        address.postal_code = String::new();
        address.country = "  ".to_string();

        let missing = address.missing_fields();
        assert_eq!(missing, vec![AddressField::PostalCode, AddressField::Country]);
    }

    #[test]
    fn test_address_wire_format() {
        let address = Address::new("123 Fake Street", "Victoria", "BC", "V8Z 5C6", "CA");
        let json = serde_json::to_string(&address).unwrap();
        assert!(json.contains("\"streetAddress\":\"123 Fake Street\""));
        assert!(json.contains("\"addressCity\":\"Victoria\""));

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }
}
