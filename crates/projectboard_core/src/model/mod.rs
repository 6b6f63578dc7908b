//! Domain model for submitted projects.
//!
//! # Responsibility
//! - Define the canonical project record rendered by every list view.
//! - Keep category tags typed instead of free-form strings.
//!
//! # Invariants
//! - Every record is identified by a non-nil `ProjectId`.
//! - Records are immutable once created; the store is the only writer.

pub mod project;
