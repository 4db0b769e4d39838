//! Test fixtures and sample data for registry tests.
//!
//! This module provides reusable records and assertions shared by the
//! service integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use record_keeper::{Appointment, Contact, Task};

pub const ID: &str = "001";
pub const TASK_NAME: &str = "Task Name";
pub const TASK_DESCRIPTION: &str = "Task Description";
pub const APPOINTMENT_DESCRIPTION: &str = "Valid Description";

/// A date safely in the future, `days` from now.
pub fn days_from_now(days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(days)
}

/// Create a sample task with the standard name and description.
pub fn sample_task(id: &str) -> Task {
    Task::new(id, TASK_NAME, TASK_DESCRIPTION).unwrap()
}

/// Create a sample contact with valid details.
pub fn sample_contact(id: &str) -> Contact {
    Contact::new(id, "Jane", "Doe", "5551234567", "1 Main Street").unwrap()
}

/// Create a sample appointment five days out.
pub fn sample_appointment(id: &str) -> Appointment {
    Appointment::new(id, days_from_now(5), APPOINTMENT_DESCRIPTION).unwrap()
}

/// Assert that two contacts match field for field.
pub fn assert_contact_equals(expected: &Contact, actual: &Contact) {
    assert_eq!(expected.id(), actual.id());
    assert_eq!(expected.first_name(), actual.first_name());
    assert_eq!(expected.last_name(), actual.last_name());
    assert_eq!(expected.phone_number(), actual.phone_number());
    assert_eq!(expected.address(), actual.address());
}
