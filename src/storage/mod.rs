//! Persistent storage

pub mod store;

pub use store::{JsonStore, StoreData, SubmissionRecord, VerifyOutcome};
