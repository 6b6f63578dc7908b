//! Rule sets gating one submission.

use crate::validation::rule::{validate, ValidationRule};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One or more fields failed their rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// Labels of failing rules, in rule-set order.
    pub fields: Vec<String>,
}

impl Display for ValidationFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid input: {}", self.fields.join(", "))
    }
}

impl Error for ValidationFailure {}

/// Ordered, independently evaluated rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<ValidationRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push(&mut self, rule: ValidationRule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Labels of every failing rule. Every rule is evaluated.
    pub fn failures(&self) -> Vec<String> {
        self.rules
            .iter()
            .filter(|rule| !validate(rule))
            .map(|rule| rule.label.clone())
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.rules.iter().all(validate)
    }

    /// Returns `Err` listing failing fields when any rule fails.
    pub fn check(&self) -> Result<(), ValidationFailure> {
        let fields = self.failures();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure { fields })
        }
    }
}

/// Converts team-size text into the number checked by numeric rules.
///
/// Mirrors numeric coercion of form text: blank input becomes `0.0` and
/// unparsable text becomes `NaN`, which fails every numeric bound. Range and
/// whole-number checks are left to the rules.
pub fn parse_people_count(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::{parse_people_count, RuleSet, ValidationFailure};
    use crate::validation::rule::ValidationRule;

    #[test]
    fn empty_rule_set_is_valid() {
        assert!(RuleSet::new().is_valid());
        assert_eq!(RuleSet::new().check(), Ok(()));
    }

    #[test]
    fn single_failing_rule_blocks_the_set() {
        let set = RuleSet::new()
            .with_rule(ValidationRule::text("title", "ok").required())
            .with_rule(ValidationRule::text("description", "tiny").min_length(5))
            .with_rule(ValidationRule::number("people", 3.0).min(1.0).max(5.0));

        assert!(!set.is_valid());
        assert_eq!(
            set.check(),
            Err(ValidationFailure {
                fields: vec!["description".to_string()]
            })
        );
    }

    #[test]
    fn failures_keep_rule_order() {
        let mut set = RuleSet::new();
        set.push(ValidationRule::text("title", "").required());
        set.push(ValidationRule::text("description", "long enough"));
        set.push(ValidationRule::number("people", 9.0).max(5.0));

        assert_eq!(set.len(), 3);
        assert_eq!(set.failures(), vec!["title", "people"]);
        let err = set.check().expect_err("two fields fail");
        assert_eq!(err.to_string(), "invalid input: title, people");
    }

    #[test]
    fn parse_people_count_follows_numeric_coercion() {
        assert_eq!(parse_people_count(" 3 "), 3.0);
        assert_eq!(parse_people_count("3.0"), 3.0);
        assert_eq!(parse_people_count("1e0"), 1.0);
        assert_eq!(parse_people_count("2.5"), 2.5);
        assert_eq!(parse_people_count("-1"), -1.0);
        assert_eq!(parse_people_count(""), 0.0);
        assert!(parse_people_count("three").is_nan());
    }
}
