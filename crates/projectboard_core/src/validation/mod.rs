//! Input validation for form submissions.
//!
//! # Responsibility
//! - Check one labeled value against an optional constraint set.
//! - Combine per-field rules into one pass/fail gate for a submission.
//!
//! # Invariants
//! - Validation is pure and never fails; violations yield `false`.
//! - A rule set passes only when every rule passes.

pub mod rule;
pub mod rule_set;
