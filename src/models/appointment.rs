//! Appointment model representing a scheduled meeting.

use super::Record;
use crate::domain::{ensure_future, required, TextRule, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An appointment with an immutable ID, a future date, and a description.
///
/// The date is checked against the clock each time it is validated, at
/// construction and on every [`Appointment::set_date`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AppointmentDraft")]
pub struct Appointment {
    id: String,
    date: DateTime<Utc>,
    description: String,
}

/// Unvalidated appointment input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppointmentDraft {
    pub id: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

impl Appointment {
    pub const ID: TextRule = TextRule::non_empty("id", 10);
    pub const DESCRIPTION: TextRule = TextRule::new("description", 50);

    /// Create a new appointment.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NotInFuture` if `date` is not strictly
    /// after the current time, or a length error for `id`/`description`.
    pub fn new(
        id: impl Into<String>,
        date: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let draft = AppointmentDraft {
            id: Some(id.into()),
            date: Some(date),
            description: Some(description.into()),
        };
        Self::from_draft(draft, Utc::now())
    }

    fn from_draft(draft: AppointmentDraft, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let id = Self::ID.require(Self::KIND, draft.id)?;
        let date = required(Self::KIND, "date", draft.date)?;
        ensure_future(Self::KIND, "date", date, now)?;
        let description = Self::DESCRIPTION.require(Self::KIND, draft.description)?;
        Ok(Self {
            id,
            date,
            description,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The ID is fixed at construction; this always fails.
    pub fn set_id(&mut self, _id: impl Into<String>) -> Result<(), ValidationError> {
        Err(ValidationError::ImmutableId { kind: Self::KIND })
    }

    /// Reschedule, requiring the new date to be in the future.
    pub fn set_date(&mut self, date: DateTime<Utc>) -> Result<(), ValidationError> {
        ensure_future(Self::KIND, "date", date, Utc::now())?;
        self.date = date;
        Ok(())
    }

    pub fn set_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let description = description.into();
        Self::DESCRIPTION.check(Self::KIND, &description)?;
        self.description = description;
        Ok(())
    }
}

impl TryFrom<AppointmentDraft> for Appointment {
    type Error = ValidationError;

    fn try_from(draft: AppointmentDraft) -> Result<Self, Self::Error> {
        Self::from_draft(draft, Utc::now())
    }
}

impl Record for Appointment {
    const KIND: &'static str = "Appointment";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn future() -> DateTime<Utc> {
        Utc::now() + Duration::days(5)
    }

    #[test]
    fn test_appointment_creation() {
        let date = future();
        let appointment = Appointment::new("001", date, "Valid Description").unwrap();
        assert_eq!(appointment.id(), "001");
        assert_eq!(appointment.date(), date);
        assert_eq!(appointment.description(), "Valid Description");
    }

    #[test]
    fn test_appointment_fields_at_max_length() {
        let id = "1".repeat(10);
        let description = "d".repeat(50);
        let appointment = Appointment::new(id.clone(), future(), description.clone()).unwrap();
        assert_eq!(appointment.id(), id);
        assert_eq!(appointment.description(), description);
    }

    #[test]
    fn test_appointment_id_bounds() {
        assert_eq!(
            Appointment::new("", future(), "Description").unwrap_err().field(),
            "id"
        );
        assert!(Appointment::new("1".repeat(11), future(), "Description").is_err());
    }

    #[test]
    fn test_appointment_date_in_past() {
        let past = Utc::now() - Duration::days(5);
        let err = Appointment::new("001", past, "Description").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotInFuture {
                kind: "Appointment",
                field: "date",
                date: past
            }
        );
    }

    #[test]
    fn test_appointment_date_equal_to_now_rejected() {
        let now = Utc::now();
        let draft = AppointmentDraft {
            id: Some("001".into()),
            date: Some(now),
            description: Some("Description".into()),
        };
        assert!(Appointment::from_draft(draft.clone(), now).is_err());

        let later = AppointmentDraft {
            date: Some(now + Duration::milliseconds(1)),
            ..draft
        };
        assert!(Appointment::from_draft(later, now).is_ok());
    }

    #[test]
    fn test_appointment_description_too_long() {
        let err = Appointment::new("001", future(), "d".repeat(51)).unwrap_err();
        assert_eq!(err.field(), "description");
    }

    #[test]
    fn test_appointment_draft_missing_fields() {
        let draft = AppointmentDraft {
            id: Some("001".into()),
            date: None,
            description: Some("Description".into()),
        };
        assert_eq!(
            Appointment::try_from(draft),
            Err(ValidationError::Missing {
                kind: "Appointment",
                field: "date"
            })
        );

        let draft = AppointmentDraft {
            id: Some("001".into()),
            date: Some(future()),
            description: None,
        };
        assert_eq!(
            Appointment::try_from(draft).unwrap_err().field(),
            "description"
        );
    }

    #[test]
    fn test_appointment_id_is_immutable() {
        let mut appointment = Appointment::new("001", future(), "Description").unwrap();
        assert_eq!(
            appointment.set_id("001"),
            Err(ValidationError::ImmutableId {
                kind: "Appointment"
            })
        );
    }

    #[test]
    fn test_appointment_set_date() {
        let mut appointment = Appointment::new("001", future(), "Description").unwrap();
        let original = appointment.date();

        assert!(appointment.set_date(Utc::now() - Duration::hours(1)).is_err());
        assert_eq!(appointment.date(), original);

        let rescheduled = Utc::now() + Duration::days(30);
        appointment.set_date(rescheduled).unwrap();
        assert_eq!(appointment.date(), rescheduled);
    }
}
