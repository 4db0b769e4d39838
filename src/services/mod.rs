//! Application service layer.
//!
//! One service per record kind. Each owns an [`InMemoryRepository`] and adds
//! the field-specific update operations for its record.
//!
//! [`InMemoryRepository`]: crate::repositories::InMemoryRepository

mod appointment_service;
mod contact_service;
mod task_service;

pub use appointment_service::AppointmentService;
pub use contact_service::ContactService;
pub use task_service::TaskService;
