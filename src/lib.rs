//! Bonustrack - Track users through promotional bonus workflows
//!
//! This library provides:
//! - The bonus state catalog and its submission-status mapping
//! - Workflow lists: parsing, normalization and serialization
//! - Progress percentages and legal transitions within a workflow
//! - A file-backed store with change notifications
//! - The enrollment service and CLI built on top of them

pub mod cli;
pub mod config;
pub mod domain;
pub mod enrollment;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod store;

// Re-export commonly used types
pub use domain::WorkflowStates;
pub use errors::{BonusTrackError, Result};
pub use schemas::{Bonus, BonusState, Config, Submission, SubmissionStatus};
