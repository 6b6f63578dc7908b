//! Project store and subscriber registry.
//!
//! # Responsibility
//! - Create project records with fresh identifiers.
//! - Notify subscribers synchronously in registration order.
//!
//! # Invariants
//! - Notification happens strictly after the new record is appended.
//! - Each notification carries the complete list, never a delta.
//! - The store is constructed once by the application and handed to views;
//!   there is no global instance.

use crate::model::project::{ProjectId, ProjectRecord};
use log::{debug, info};
use std::fmt::{Debug, Formatter};

/// Callback receiving a full project snapshot.
pub type Subscriber = Box<dyn FnMut(Vec<ProjectRecord>)>;

/// Canonical in-memory project list plus its subscribers.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<ProjectRecord>,
    subscribers: Vec<Subscriber>,
}

impl Debug for ProjectStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback for every future mutation.
    ///
    /// The callback is not invoked with current state. Registering the same
    /// logic twice yields two independent notifications.
    ///
    /// Returns the number of registered subscribers.
    pub fn subscribe(&mut self, listener: impl FnMut(Vec<ProjectRecord>) + 'static) -> usize {
        self.subscribers.push(Box::new(listener));
        debug!(
            "event=subscriber_added module=store status=ok subscribers={}",
            self.subscribers.len()
        );
        self.subscribers.len()
    }

    /// Appends a new project and broadcasts the full list.
    ///
    /// Inputs are expected to be validated by the caller.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let record = ProjectRecord::new(title, description, people);
        let id = record.id();
        self.projects.push(record);

        info!(
            "event=project_added module=store status=ok id={} people={} total={} subscribers={}",
            id,
            people,
            self.projects.len(),
            self.subscribers.len()
        );

        for subscriber in &mut self.subscribers {
            subscriber(self.projects.clone());
        }
        id
    }

    /// Returns a copy of the current project list.
    pub fn projects(&self) -> Vec<ProjectRecord> {
        self.projects.clone()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
