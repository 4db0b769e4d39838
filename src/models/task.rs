//! Task model representing a unit of work.

use super::Record;
use crate::domain::{TextRule, ValidationError};
use serde::{Deserialize, Serialize};

/// A task with an immutable ID, a name, and a description.
///
/// All fields are validated together before the task exists, so a `Task`
/// value always satisfies its length constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskDraft")]
pub struct Task {
    id: String,
    name: String,
    description: String,
}

/// Unvalidated task input, as it arrives from deserialization.
///
/// Fields left as `None` are reported as missing when converted into a
/// [`Task`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDraft {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Task {
    pub const ID: TextRule = TextRule::new("id", 10);
    pub const NAME: TextRule = TextRule::new("name", 20);
    pub const DESCRIPTION: TextRule = TextRule::new("description", 50);

    /// Create a new task.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found, checking `id`, `name`,
    /// then `description`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::try_from(TaskDraft {
            id: Some(id.into()),
            name: Some(name.into()),
            description: Some(description.into()),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The ID is fixed at construction; this always fails.
    pub fn set_id(&mut self, _id: impl Into<String>) -> Result<(), ValidationError> {
        Err(ValidationError::ImmutableId { kind: Self::KIND })
    }

    /// Replace the name after validating it.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        Self::NAME.check(Self::KIND, &name)?;
        self.name = name;
        Ok(())
    }

    /// Replace the description after validating it.
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

impl TryFrom<TaskDraft> for Task {
    type Error = ValidationError;

    fn try_from(draft: TaskDraft) -> Result<Self, Self::Error> {
        let id = Self::ID.require(Self::KIND, draft.id)?;
        let name = Self::NAME.require(Self::KIND, draft.name)?;
        let description = Self::DESCRIPTION.require(Self::KIND, draft.description)?;
        Ok(Self {
            id,
            name,
            description,
        })
    }
}

impl Record for Task {
    const KIND: &'static str = "Task";

    fn id(&self) -> &str {
        &self.id
    }
}
