//! Project record model.
//!
//! # Responsibility
//! - Define the immutable record appended by `ProjectStore::add_project`.
//! - Define the category tag used to label list views.
//!
//! # Invariants
//! - `id` is generated once and never reused for another record.
//! - `people` is already validated by the caller; the model does not re-check it.

use serde::Serialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one project record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Category tag for a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work that is still going on.
    Active,
    /// Work that has been wrapped up.
    Finished,
}

impl ProjectStatus {
    /// Stable lowercase tag, also used to derive element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// User-facing list heading, e.g. `ACTIVE PROJECTS`.
    pub fn heading(self) -> String {
        format!("{} PROJECTS", self.as_str().to_uppercase())
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user-submitted project entry.
///
/// Fields are private so snapshot holders cannot forge or edit records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    id: ProjectId,
    title: String,
    description: String,
    people: u32,
}

impl ProjectRecord {
    pub(crate) fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id: ProjectId::generate(),
            title: title.into(),
            description: description.into(),
            people,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Team size for this project.
    pub fn people(&self) -> u32 {
        self.people
    }
}
