//! # repasse-types
//!
//! Core type definitions for the repasse education-census gateway.
//!
//! This crate is the foundation of the dependency graph -- the gateway and
//! CLI crates depend on it. It contains:
//!
//! - **[`student`]** -- [`StudentRecord`], the enrollment data under audit
//! - **[`audit`]** -- [`AuditIssue`] and the ordered [`Severity`] scale
//! - **[`quiz`]** -- [`QuizQuestion`], generated remedial practice items
//! - **[`fixtures`]** -- the bundled demo dataset and canned audit result
//!
//! All payload types serialize with camelCase field names: the record list is
//! embedded verbatim in prompts, and the inference endpoint echoes the same
//! field names back in its constrained JSON output.

pub mod audit;
pub mod fixtures;
pub mod quiz;
pub mod student;

pub use audit::{AuditIssue, Severity};
pub use quiz::QuizQuestion;
pub use student::StudentRecord;
