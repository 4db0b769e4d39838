//! Record Keeper - validated in-memory registries for appointments, contacts, and tasks.
//!
//! Every record validates all of its fields before it exists and keeps its
//! ID fixed afterwards. Each service stores one record kind, refuses
//! duplicate IDs, and routes field edits back through the record's
//! validation.
//!
//! # Architecture
//!
//! - **domain**: Validation rules and value objects (text length, phone number, future date)
//! - **models**: The `Appointment`, `Contact`, and `Task` records and their drafts
//! - **repositories**: Generic in-memory store keyed by record ID
//! - **services**: Per-kind registries with field-specific update operations
//! - **error**: Registry, configuration, and logging error types
//! - **config**: Configuration management from environment variables
//! - **observability**: Log subscriber setup and registry metrics
//!
//! # Example
//!
//! ```
//! use record_keeper::{Task, TaskService};
//!
//! let mut service = TaskService::new();
//! service.add_task(Task::new("001", "Task Name", "Task Description").unwrap()).unwrap();
//! service.update_name("001", "Updated Name").unwrap();
//! assert_eq!(service.get_task("001").unwrap().name(), "Updated Name");
//! assert!(service.update_name("999", "x").is_err());
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use domain::{PhoneNumber, ValidationError};
pub use error::{ConfigError, InvalidOperation, LoggingError, RegistryError};
pub use models::{Appointment, AppointmentDraft, Contact, ContactDraft, Record, Task, TaskDraft};
pub use observability::{init_logging, RegistryMetrics};
pub use repositories::InMemoryRepository;
pub use services::{AppointmentService, ContactService, TaskService};
