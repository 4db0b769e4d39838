//! Appointment service layer.

use crate::config::Config;
use crate::error::{OperationResult, RegistryResult};
use crate::models::Appointment;
use crate::observability::RegistryMetrics;
use crate::repositories::InMemoryRepository;
use chrono::{DateTime, Utc};

/// Registry of appointments keyed by appointment ID.
///
/// Deleting an unknown ID returns `false` like the other services rather
/// than failing.
#[derive(Debug, Default)]
pub struct AppointmentService {
    appointments: InMemoryRepository<Appointment>,
}

impl AppointmentService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an appointment service sized from configuration.
    pub fn with_config(config: &Config) -> Self {
        Self {
            appointments: InMemoryRepository::with_capacity(config.registry_initial_capacity),
        }
    }

    /// Add an appointment whose ID is not yet registered.
    pub fn add_appointment(&mut self, appointment: Appointment) -> OperationResult<()> {
        self.appointments.add(appointment)
    }

    pub fn delete_appointment(&mut self, id: &str) -> bool {
        self.appointments.delete(id)
    }

    pub fn get_appointment(&self, id: &str) -> Option<&Appointment> {
        self.appointments.get(id)
    }

    /// Reschedule an existing appointment to a future date.
    pub fn update_date(&mut self, id: &str, date: DateTime<Utc>) -> RegistryResult<()> {
        self.appointments
            .update(id, |appointment| appointment.set_date(date))
    }

    pub fn update_description(
        &mut self,
        id: &str,
        description: impl Into<String>,
    ) -> RegistryResult<()> {
        self.appointments
            .update(id, |appointment| appointment.set_description(description))
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.appointments.contains(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.appointments.ids()
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        self.appointments.metrics()
    }
}
