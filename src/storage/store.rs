//! Flat JSON store for UID submissions and verified users
//!
//! The whole document is loaded on every access and rewritten on every
//! mutation. There is no locking: two processes sharing one file race on
//! read-modify-write and the last full write wins.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::AppResult;

/// A user's latest UID submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub uid: String,
    #[serde(rename = "time")]
    pub submitted_at: DateTime<Utc>,
}

/// Root store document
///
/// Serialized as `{"uids": {"<user id>": {"uid": ..., "time": ...}}, "vip": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreData {
    /// Submissions keyed by platform user id
    #[serde(rename = "uids", default)]
    pub submissions: BTreeMap<String, SubmissionRecord>,
    /// Verified (VIP) platform user ids, in verification order
    #[serde(rename = "vip", default)]
    pub verified: Vec<String>,
}

/// Result of marking a user as verified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The user has never submitted a UID
    NoSubmission,
    /// The user was added to the verified set
    Verified,
    /// The user was already verified; nothing changed
    AlreadyVerified,
}

impl StoreData {
    /// Inserts or replaces the user's submission, returning the previous one
    pub fn upsert_submission(
        &mut self,
        user_id: &str,
        uid: &str,
        submitted_at: DateTime<Utc>,
    ) -> Option<SubmissionRecord> {
        self.submissions.insert(
            user_id.to_string(),
            SubmissionRecord {
                uid: uid.to_string(),
                submitted_at,
            },
        )
    }

    pub fn submission(&self, user_id: &str) -> Option<&SubmissionRecord> {
        self.submissions.get(user_id)
    }

    pub fn is_verified(&self, user_id: &str) -> bool {
        self.verified.iter().any(|id| id == user_id)
    }

    /// Adds the user to the verified set if they have a submission
    pub fn verify(&mut self, user_id: &str) -> VerifyOutcome {
        if !self.submissions.contains_key(user_id) {
            return VerifyOutcome::NoSubmission;
        }
        if self.is_verified(user_id) {
            return VerifyOutcome::AlreadyVerified;
        }
        self.verified.push(user_id.to_string());
        VerifyOutcome::Verified
    }

    /// Submissions still waiting for operator verification
    pub fn pending(&self) -> impl Iterator<Item = (&String, &SubmissionRecord)> + '_ {
        self.submissions.iter().filter(move |(id, _)| !self.is_verified(id))
    }
}

/// File-backed store
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the whole document.
    ///
    /// When the file does not exist yet an empty document is written first,
    /// so the file is present after the first access.
    pub async fn load(&self) -> AppResult<StoreData> {
        if !tokio::fs::try_exists(&self.path).await? {
            let empty = StoreData::default();
            self.save(&empty).await?;
            log::info!("Created empty store at {}", self.path.display());
            return Ok(empty);
        }
        let raw = fs_err::tokio::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Replaces the file with the whole document.
    ///
    /// The document goes to a sibling temp file first and is renamed over
    /// the target, so readers see either the old or the new version.
    pub async fn save(&self, data: &StoreData) -> AppResult<()> {
        let json = serde_json::to_string_pretty(data)?;
        let tmp_path = self.tmp_path();
        fs_err::tokio::write(&tmp_path, json).await?;
        fs_err::tokio::rename(&tmp_path, &self.path).await?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Records a UID submission for the user, replacing any earlier one
    pub async fn submit_uid(
        &self,
        user_id: &str,
        uid: &str,
        submitted_at: DateTime<Utc>,
    ) -> AppResult<SubmissionRecord> {
        let mut data = self.load().await?;
        if let Some(previous) = data.upsert_submission(user_id, uid, submitted_at) {
            log::debug!("User {} replaced UID {} with {}", user_id, previous.uid, uid);
        }
        self.save(&data).await?;
        Ok(SubmissionRecord {
            uid: uid.to_string(),
            submitted_at,
        })
    }

    /// Marks the user as verified. The file is only rewritten when the
    /// verified set actually changes.
    pub async fn verify(&self, user_id: &str) -> AppResult<VerifyOutcome> {
        let mut data = self.load().await?;
        let outcome = data.verify(user_id);
        if outcome == VerifyOutcome::Verified {
            self.save(&data).await?;
        }
        Ok(outcome)
    }
}
