//! Application composition root.
//!
//! # Responsibility
//! - Construct the store once and inject it into every view.
//! - Offer one entry point per user action for front ends.

use crate::model::project::{ProjectId, ProjectRecord, ProjectStatus};
use crate::store::project_store::ProjectStore;
use crate::view::input::{ProjectInput, SubmitError};
use crate::view::list::ProjectList;
use serde::Serialize;

/// Serializable view of both lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub active: Vec<ProjectRecord>,
    pub finished: Vec<ProjectRecord>,
}

/// Form plus the active and finished lists, sharing one store.
#[derive(Debug)]
pub struct ProjectBoard {
    store: ProjectStore,
    input: ProjectInput,
    active: ProjectList,
    finished: ProjectList,
}

impl Default for ProjectBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectBoard {
    pub fn new() -> Self {
        let mut store = ProjectStore::new();
        let input = ProjectInput::new();
        let active = ProjectList::new(ProjectStatus::Active, &mut store);
        let finished = ProjectList::new(ProjectStatus::Finished, &mut store);
        Self {
            store,
            input,
            active,
            finished,
        }
    }

    /// Fills the form with raw field text and submits it.
    pub fn submit(
        &mut self,
        title: &str,
        description: &str,
        people: &str,
    ) -> Result<ProjectId, SubmitError> {
        self.input.set_title(title);
        self.input.set_description(description);
        self.input.set_people(people);
        self.input.submit(&mut self.store)
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn input(&self) -> &ProjectInput {
        &self.input
    }

    pub fn list(&self, status: ProjectStatus) -> &ProjectList {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    /// Renders the active list followed by the finished list.
    pub fn render(&self) -> String {
        format!("{}\n{}", self.active.render(), self.finished.render())
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            active: self.active.assigned_projects(),
            finished: self.finished.assigned_projects(),
        }
    }
}
