//! Domain value objects and validation rules.
//!
//! This module contains the building blocks every record kind validates
//! itself with: length rules for text fields, the phone number value object,
//! and the future-date check. Invalid data is rejected before it can be
//! represented in a record.

pub mod errors;
pub mod field;
pub mod phone;

pub use errors::ValidationError;
pub use field::{ensure_future, required, TextRule};
pub use phone::PhoneNumber;
