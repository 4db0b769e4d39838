//! Contact model representing a person in the address book.

use super::Record;
use crate::domain::{required, PhoneNumber, TextRule, ValidationError};
use serde::{Deserialize, Serialize};

/// A contact with an immutable ID, a name, a phone number, and an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactDraft")]
pub struct Contact {
    /// Unique identifier, 1-10 characters
    id: String,

    /// First name, at most 10 characters
    first_name: String,

    /// Last name, at most 10 characters
    last_name: String,

    /// Exactly ten digits
    phone_number: PhoneNumber,

    /// Postal address, at most 30 characters
    address: String,
}

/// Unvalidated contact input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

impl Contact {
    pub const ID: TextRule = TextRule::non_empty("id", 10);
    pub const FIRST_NAME: TextRule = TextRule::new("first_name", 10);
    pub const LAST_NAME: TextRule = TextRule::new("last_name", 10);
    pub const ADDRESS: TextRule = TextRule::new("address", 30);

    /// Create a new contact.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found, checking fields in
    /// declaration order.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::try_from(ContactDraft {
            id: Some(id.into()),
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            phone_number: Some(phone_number.into()),
            address: Some(address.into()),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_number(&self) -> &str {
        self.phone_number.as_str()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// The ID is fixed at construction; this always fails.
    pub fn set_id(&mut self, _id: impl Into<String>) -> Result<(), ValidationError> {
        Err(ValidationError::ImmutableId { kind: Self::KIND })
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> Result<(), ValidationError> {
        let first_name = first_name.into();
        Self::FIRST_NAME.check(Self::KIND, &first_name)?;
        self.first_name = first_name;
        Ok(())
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> Result<(), ValidationError> {
        let last_name = last_name.into();
        Self::LAST_NAME.check(Self::KIND, &last_name)?;
        self.last_name = last_name;
        Ok(())
    }

    pub fn set_phone_number(
        &mut self,
        phone_number: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.phone_number = PhoneNumber::new(phone_number)?;
        Ok(())
    }

    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), ValidationError> {
        let address = address.into();
        Self::ADDRESS.check(Self::KIND, &address)?;
        self.address = address;
        Ok(())
    }
}

impl TryFrom<ContactDraft> for Contact {
    type Error = ValidationError;

    fn try_from(draft: ContactDraft) -> Result<Self, Self::Error> {
        let id = Self::ID.require(Self::KIND, draft.id)?;
        let first_name = Self::FIRST_NAME.require(Self::KIND, draft.first_name)?;
        let last_name = Self::LAST_NAME.require(Self::KIND, draft.last_name)?;
        let phone_number =
            PhoneNumber::new(required(Self::KIND, "phone_number", draft.phone_number)?)?;
        let address = Self::ADDRESS.require(Self::KIND, draft.address)?;
        Ok(Self {
            id,
            first_name,
            last_name,
            phone_number,
            address,
        })
    }
}

impl Record for Contact {
    const KIND: &'static str = "Contact";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Contact {
        Contact::new("001", "Jane", "Doe", "5551234567", "1 Main Street").unwrap()
    }

    #[test]
    fn test_contact_creation() {
        let contact = sample();
        assert_eq!(contact.id(), "001");
        assert_eq!(contact.first_name(), "Jane");
        assert_eq!(contact.last_name(), "Doe");
        assert_eq!(contact.phone_number(), "5551234567");
        assert_eq!(contact.address(), "1 Main Street");
    }

    #[test]
    fn test_contact_fields_at_max_length() {
        let contact = Contact::new(
            "i".repeat(10),
            "f".repeat(10),
            "l".repeat(10),
            "0123456789",
            "a".repeat(30),
        )
        .unwrap();
        assert_eq!(contact.id(), "i".repeat(10));
        assert_eq!(contact.first_name(), "f".repeat(10));
        assert_eq!(contact.last_name(), "l".repeat(10));
        assert_eq!(contact.address(), "a".repeat(30));
    }

    #[test]
    fn test_contact_id_required_non_empty() {
        let err = Contact::new("", "Jane", "Doe", "5551234567", "Street").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooShort {
                kind: "Contact",
                field: "id",
                min: 1
            }
        );
        assert!(Contact::new("12345678901", "Jane", "Doe", "5551234567", "Street").is_err());
    }

    #[test]
    fn test_contact_field_limits() {
        assert_eq!(
            Contact::new("1", "InvalidFirst", "Doe", "5551234567", "Street")
                .unwrap_err()
                .field(),
            "first_name"
        );
        assert_eq!(
            Contact::new("1", "Jane", "InvalidLastName", "5551234567", "Street")
                .unwrap_err()
                .field(),
            "last_name"
        );
        assert_eq!(
            Contact::new("1", "Jane", "Doe", "5551234567", "a".repeat(31))
                .unwrap_err()
                .field(),
            "address"
        );
    }

    #[test]
    fn test_contact_phone_number_format() {
        for bad in ["1234", "8", "123457890", "12341234111", "555123456x"] {
            let err = Contact::new("1", "Jane", "Doe", bad, "Street").unwrap_err();
            assert_eq!(err, ValidationError::InvalidPhone(bad.to_string()));
        }
        assert!(Contact::new("1", "Jane", "Doe", "9881281238", "Street").is_ok());
    }

    #[test]
    fn test_contact_draft_missing_phone() {
        let draft = ContactDraft {
            id: Some("1".into()),
            first_name: Some("Jane".into()),
            last_name: Some("Doe".into()),
            phone_number: None,
            address: Some("Street".into()),
        };
        assert_eq!(
            Contact::try_from(draft),
            Err(ValidationError::Missing {
                kind: "Contact",
                field: "phone_number"
            })
        );
    }

    #[test]
    fn test_contact_draft_missing_id() {
        assert_eq!(
            Contact::try_from(ContactDraft::default()),
            Err(ValidationError::Missing {
                kind: "Contact",
                field: "id"
            })
        );
    }

    #[test]
    fn test_contact_id_is_immutable() {
        let mut contact = sample();
        assert!(contact.set_id("002").is_err());
        assert_eq!(contact.id(), "001");
    }

    #[test]
    fn test_contact_setters_leave_value_on_error() {
        let mut contact = sample();

        assert!(contact.set_phone_number("555").is_err());
        assert_eq!(contact.phone_number(), "5551234567");

        contact.set_phone_number("7773167773").unwrap();
        assert_eq!(contact.phone_number(), "7773167773");

        assert!(contact.set_first_name("TooLongFirstName").is_err());
        assert_eq!(contact.first_name(), "Jane");

        contact.set_last_name("Smith").unwrap();
        assert_eq!(contact.last_name(), "Smith");

        contact.set_address("2 Side Road").unwrap();
        assert_eq!(contact.address(), "2 Side Road");
    }
}
