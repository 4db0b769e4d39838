//! Task service layer.
//!
//! Add, look up, delete, and edit tasks by ID.

use crate::config::Config;
use crate::error::{OperationResult, RegistryResult};
use crate::models::Task;
use crate::observability::RegistryMetrics;
use crate::repositories::InMemoryRepository;

/// Registry of tasks keyed by task ID.
#[derive(Debug, Default)]
pub struct TaskService {
    tasks: InMemoryRepository<Task>,
}

impl TaskService {
    /// Create a new empty task service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a task service sized from configuration.
    pub fn with_config(config: &Config) -> Self {
        Self {
            tasks: InMemoryRepository::with_capacity(config.registry_initial_capacity),
        }
    }

    /// Add a task whose ID is not yet registered.
    pub fn add_task(&mut self, task: Task) -> OperationResult<()> {
        self.tasks.add(task)
    }

    /// Delete a task, returning `false` if none had this ID.
    pub fn delete_task(&mut self, id: &str) -> bool {
        self.tasks.delete(id)
    }

    pub fn get_task(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Rename an existing task.
    pub fn update_name(&mut self, id: &str, name: impl Into<String>) -> RegistryResult<()> {
        self.tasks.update(id, |task| task.set_name(name))
    }

    pub fn update_description(
        &mut self,
        id: &str,
        description: impl Into<String>,
    ) -> RegistryResult<()> {
        self.tasks.update(id, |task| task.set_description(description))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tasks.contains(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.tasks.ids()
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        self.tasks.metrics()
    }
}
