//! Story domain model and the fixed catalog.
//!
//! # Responsibility
//! - Define the immutable story record shown by every view.
//! - Own catalog construction and id validation.
//!
//! # Invariants
//! - Story ids are unique within a catalog and stable for the process lifetime.
//! - The catalog is never mutated after construction.

pub mod catalog;
pub mod story;
