#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Offline registration form TUI with locally persisted submissions.
//!
//! The core is three small pieces: a [`model::FormState`] owning the draft
//! record and its validation errors, a pure validator, and a
//! [`storage::SubmissionStore`] persisting accepted records as a single JSON
//! snapshot. The [`tui`] module is presentation only and owns no business
//! logic.

pub mod model;
pub mod storage;
pub mod tui;
