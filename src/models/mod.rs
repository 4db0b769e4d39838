//! Record models.
//!
//! This module contains the three record kinds managed by the registries:
//! appointments, contacts, and tasks. Each record validates every field at
//! construction and keeps its ID fixed for its whole lifetime. The matching
//! `*Draft` types carry unvalidated, possibly incomplete input.

pub mod appointment;
pub mod contact;
pub mod task;

pub use appointment::{Appointment, AppointmentDraft};
pub use contact::{Contact, ContactDraft};
pub use task::{Task, TaskDraft};

/// A record that can be stored in a registry, keyed by its ID.
pub trait Record {
    /// Human-readable kind name used in errors and logs.
    const KIND: &'static str;

    /// The record's unique, immutable identifier.
    fn id(&self) -> &str;
}
