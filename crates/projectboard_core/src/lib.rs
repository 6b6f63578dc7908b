//! Core logic for the project board.
//! Records, validation, the project store and headless views live here; front
//! ends only feed raw field text in and render snapshots out.

pub mod app;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
pub mod view;

pub use app::{BoardSnapshot, ProjectBoard};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{ProjectId, ProjectRecord, ProjectStatus};
pub use store::project_store::{ProjectStore, Subscriber};
pub use validation::rule::{validate, ValidatableValue, ValidationRule};
pub use validation::rule_set::{parse_people_count, RuleSet, ValidationFailure};
pub use view::input::{ProjectInput, ProjectSubmission, SubmitError, REJECTION_MESSAGE};
pub use view::list::ProjectList;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
