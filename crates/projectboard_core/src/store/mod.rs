//! In-memory project state with change fan-out.
//!
//! # Responsibility
//! - Own the canonical project list.
//! - Push a full snapshot to every subscriber after each mutation.
//!
//! # Invariants
//! - The list is append-only.
//! - Subscribers only ever see owned copies, never store internals.

pub mod project_store;
