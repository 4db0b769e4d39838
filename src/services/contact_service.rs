//! Contact service layer.
//!
//! Business logic for storing contacts and editing their details. The
//! contact ID never changes; every other field is edited through the
//! `update_*` methods, which run the same validation as construction.

use crate::config::Config;
use crate::error::{OperationResult, RegistryResult};
use crate::models::Contact;
use crate::observability::RegistryMetrics;
use crate::repositories::InMemoryRepository;

/// Registry of contacts keyed by contact ID.
#[derive(Debug, Default)]
pub struct ContactService {
    contacts: InMemoryRepository<Contact>,
}

impl ContactService {
    /// Create a new empty contact service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a contact service sized from configuration.
    pub fn with_config(config: &Config) -> Self {
        Self {
            contacts: InMemoryRepository::with_capacity(config.registry_initial_capacity),
        }
    }

    /// Add a contact.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation::DuplicateId` if the contact ID is taken.
    pub fn add_contact(&mut self, contact: Contact) -> OperationResult<()> {
        self.contacts.add(contact)
    }

    /// Delete a contact, returning whether it existed.
    pub fn delete_contact(&mut self, id: &str) -> bool {
        self.contacts.delete(id)
    }

    /// Get complete details for a specific contact.
    pub fn get_contact(&self, id: &str) -> Option<&Contact> {
        self.contacts.get(id)
    }

    /// Update the first name of an existing contact.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation::NotFound` for an unknown ID, or the
    /// `ValidationError` for a name longer than ten characters.
    pub fn update_first_name(
        &mut self,
        id: &str,
        first_name: impl Into<String>,
    ) -> RegistryResult<()> {
        self.contacts
            .update(id, |contact| contact.set_first_name(first_name))
    }

    /// Update the last name of an existing contact.
    pub fn update_last_name(
        &mut self,
        id: &str,
        last_name: impl Into<String>,
    ) -> RegistryResult<()> {
        self.contacts.update(id, |contact| contact.set_last_name(last_name))
    }

    /// Update the phone number of an existing contact.
    pub fn update_phone_number(
        &mut self,
        id: &str,
        phone_number: impl Into<String>,
    ) -> RegistryResult<()> {
        self.contacts
            .update(id, |contact| contact.set_phone_number(phone_number))
    }

    /// Update the address of an existing contact.
    pub fn update_address(&mut self, id: &str, address: impl Into<String>) -> RegistryResult<()> {
        self.contacts.update(id, |contact| contact.set_address(address))
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.contacts.contains(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.contacts.ids()
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        self.contacts.metrics()
    }
}
