//! Project list view for one category.
//!
//! Both list views receive the same unfiltered project stream; the category
//! only labels the view.

use crate::model::project::{ProjectRecord, ProjectStatus};
use crate::store::project_store::ProjectStore;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct ListState {
    assigned_projects: Vec<ProjectRecord>,
    render_count: usize,
}

/// Read-only display of the latest snapshot delivered by the store.
#[derive(Debug)]
pub struct ProjectList {
    status: ProjectStatus,
    state: Rc<RefCell<ListState>>,
}

impl ProjectList {
    /// Creates the view and subscribes it to `store`.
    pub fn new(status: ProjectStatus, store: &mut ProjectStore) -> Self {
        let state = Rc::new(RefCell::new(ListState::default()));
        let subscriber_state = Rc::clone(&state);
        store.subscribe(move |projects| {
            let mut state = subscriber_state.borrow_mut();
            state.assigned_projects = projects;
            state.render_count += 1;
            debug!(
                "event=list_refreshed module=list status={} projects={}",
                status,
                state.assigned_projects.len()
            );
        });
        Self { status, state }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Container id, e.g. `active-projects`.
    pub fn element_id(&self) -> String {
        format!("{}-projects", self.status.as_str())
    }

    /// List id, e.g. `active-projects-list`.
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status.as_str())
    }

    pub fn heading(&self) -> String {
        self.status.heading()
    }

    /// Copy of the snapshot last delivered by the store.
    pub fn assigned_projects(&self) -> Vec<ProjectRecord> {
        self.state.borrow().assigned_projects.clone()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().assigned_projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().assigned_projects.is_empty()
    }

    /// Number of snapshots received since construction.
    pub fn render_count(&self) -> usize {
        self.state.borrow().render_count
    }

    /// Renders the heading and one line per project.
    pub fn render(&self) -> String {
        let state = self.state.borrow();
        let mut out = self.heading();
        out.push('\n');
        if state.assigned_projects.is_empty() {
            out.push_str("  (no projects)\n");
            return out;
        }
        for project in &state.assigned_projects {
            let unit = if project.people() == 1 { "person" } else { "people" };
            out.push_str(&format!(
                "  - {} ({} {unit})\n",
                project.title(),
                project.people()
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectList;
    use crate::model::project::ProjectStatus;
    use crate::store::project_store::ProjectStore;

    #[test]
    fn ids_and_heading_follow_status() {
        let mut store = ProjectStore::new();
        let list = ProjectList::new(ProjectStatus::Active, &mut store);
        assert_eq!(list.element_id(), "active-projects");
        assert_eq!(list.list_id(), "active-projects-list");
        assert_eq!(list.heading(), "ACTIVE PROJECTS");
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn starts_empty_until_first_notification() {
        let mut store = ProjectStore::new();
        store.add_project("Before", "added before view", 2);
        let list = ProjectList::new(ProjectStatus::Finished, &mut store);

        assert!(list.is_empty());
        assert_eq!(list.render_count(), 0);
        assert_eq!(list.render(), "FINISHED PROJECTS\n  (no projects)\n");
    }

    #[test]
    fn replaces_snapshot_on_each_notification() {
        let mut store = ProjectStore::new();
        let list = ProjectList::new(ProjectStatus::Active, &mut store);

        store.add_project("One", "first project", 1);
        store.add_project("Two", "second project", 4);

        assert_eq!(list.len(), 2);
        assert_eq!(list.render_count(), 2);
        assert_eq!(
            list.render(),
            "ACTIVE PROJECTS\n  - One (1 person)\n  - Two (4 people)\n"
        );
    }

    #[test]
    fn render_ends_every_project_line_with_newline() {
        let mut store = ProjectStore::new();
        let list = ProjectList::new(ProjectStatus::Finished, &mut store);
        store.add_project("Solo", "single person project", 1);

        let rendered = list.render();
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.ends_with("(1 person)\n"));
    }
}
