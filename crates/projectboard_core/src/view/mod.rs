//! Headless view models for the project form and the project lists.
//!
//! # Responsibility
//! - Gate submissions through validation before touching the store.
//! - Keep each list view's snapshot current via store subscriptions.
//!
//! # Invariants
//! - Rejected submissions never mutate the store or clear the form.
//! - List views replace their snapshot wholesale on every notification.

pub mod input;
pub mod list;
