//! Project input form.

use crate::model::project::ProjectId;
use crate::store::project_store::ProjectStore;
use crate::validation::rule::ValidationRule;
use crate::validation::rule_set::{parse_people_count, RuleSet, ValidationFailure};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message shown to the user when a submission is rejected.
pub const REJECTION_MESSAGE: &str = "Invalid input, please try again";

pub const TITLE_FIELD: &str = "title";
pub const DESCRIPTION_FIELD: &str = "description";
pub const PEOPLE_FIELD: &str = "people";

const DESCRIPTION_MIN_LENGTH: usize = 5;
const PEOPLE_MIN: f64 = 1.0;
const PEOPLE_MAX: f64 = 5.0;

/// Validated, parsed form values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSubmission {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Submission errors surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    Invalid(ValidationFailure),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(_) => f.write_str(REJECTION_MESSAGE),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<ValidationFailure> for SubmitError {
    fn from(value: ValidationFailure) -> Self {
        Self::Invalid(value)
    }
}

/// Form state for one pending submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInput {
    title: String,
    description: String,
    people: String,
}

impl ProjectInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Raw team-size text as typed.
    pub fn people(&self) -> &str {
        &self.people
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_people(&mut self, value: impl Into<String>) {
        self.people = value.into();
    }

    /// Builds the rule set for the current field values.
    pub fn rule_set(&self) -> RuleSet {
        self.rules_for(parse_people_count(&self.people))
    }

    fn rules_for(&self, people: f64) -> RuleSet {
        RuleSet::new()
            .with_rule(ValidationRule::text(TITLE_FIELD, self.title.as_str()).required())
            .with_rule(
                ValidationRule::text(DESCRIPTION_FIELD, self.description.as_str())
                    .required()
                    .min_length(DESCRIPTION_MIN_LENGTH),
            )
            .with_rule(
                ValidationRule::number(PEOPLE_FIELD, people)
                    .required()
                    .min(PEOPLE_MIN)
                    .max(PEOPLE_MAX)
                    .whole_number(),
            )
    }

    /// Validates all fields and returns parsed values.
    ///
    /// # Errors
    /// - Returns `ValidationFailure` naming every failing field.
    pub fn gather_user_input(&self) -> Result<ProjectSubmission, ValidationFailure> {
        let people = parse_people_count(&self.people);
        self.rules_for(people).check()?;

        // Checked above as a whole number in 1..=5, so the cast is exact.
        Ok(ProjectSubmission {
            title: self.title.clone(),
            description: self.description.clone(),
            people: people as u32,
        })
    }

    /// Submits the form into `store`.
    ///
    /// On success the record is appended, subscribers are notified and all
    /// fields are cleared. On rejection nothing changes.
    pub fn submit(&mut self, store: &mut ProjectStore) -> Result<ProjectId, SubmitError> {
        let submission = match self.gather_user_input() {
            Ok(submission) => submission,
            Err(err) => {
                warn!(
                    "event=submit_rejected module=input status=rejected fields={}",
                    err.fields.join(",")
                );
                return Err(err.into());
            }
        };

        let id = store.add_project(submission.title, submission.description, submission.people);
        info!("event=submit_accepted module=input status=ok id={id}");
        self.clear();
        Ok(id)
    }

    /// Resets all three fields.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{ProjectInput, SubmitError, DESCRIPTION_FIELD, PEOPLE_FIELD, TITLE_FIELD};
    use crate::store::project_store::ProjectStore;

    fn filled(title: &str, description: &str, people: &str) -> ProjectInput {
        let mut input = ProjectInput::new();
        input.set_title(title);
        input.set_description(description);
        input.set_people(people);
        input
    }

    #[test]
    fn gather_parses_valid_input() {
        let submission = filled("Build API", "Design and implement v1", " 3 ")
            .gather_user_input()
            .expect("valid input");
        assert_eq!(submission.title, "Build API");
        assert_eq!(submission.people, 3);
    }

    #[test]
    fn gather_reports_every_failing_field() {
        let err = filled("", "four", "0")
            .gather_user_input()
            .expect_err("all fields invalid");
        assert_eq!(err.fields, vec![TITLE_FIELD, DESCRIPTION_FIELD, PEOPLE_FIELD]);
    }

    #[test]
    fn people_bounds_are_enforced() {
        for people in ["0", "6", "", "abc", "1.5", "2.5", "-1", "inf", "NaN"] {
            let err = filled("t", "long enough", people)
                .gather_user_input()
                .expect_err("people out of range");
            assert_eq!(err.fields, vec![PEOPLE_FIELD], "people={people:?}");
        }
        for people in ["1", "5"] {
            assert!(filled("t", "long enough", people).gather_user_input().is_ok());
        }
    }

    #[test]
    fn whole_number_spellings_are_accepted() {
        for people in ["3.0", " 3 ", "3e0", "+3"] {
            let submission = filled("t", "long enough", people)
                .gather_user_input()
                .expect("whole number spelling should be accepted");
            assert_eq!(submission.people, 3, "people={people:?}");
        }
    }

    #[test]
    fn successful_submit_clears_fields() {
        let mut store = ProjectStore::new();
        let mut input = filled("Build API", "Design and implement v1", "3");

        let id = input.submit(&mut store).expect("submit should succeed");

        assert_eq!(store.len(), 1);
        assert_eq!(store.projects()[0].id(), id);
        assert_eq!(input, ProjectInput::new());
    }

    #[test]
    fn rejected_submit_keeps_fields_and_store() {
        let mut store = ProjectStore::new();
        let mut input = filled("", "short", "0");

        let err = input.submit(&mut store).expect_err("submit should fail");

        assert!(matches!(err, SubmitError::Invalid(_)));
        assert_eq!(err.to_string(), "Invalid input, please try again");
        assert!(store.is_empty());
        assert_eq!(input.description(), "short");
        assert_eq!(input.people(), "0");
    }
}
