//! Form validation engine.
//!
//! # Responsibility
//! - Gate task drafts behind field-level validation before they reach the
//!   store.

pub mod task_form;
