//! Provider-neutral record data model
//!
//! All values here live for a single run. The desired record is built
//! once from the settings plus the resolved public IP; record sets are
//! fetched from the provider, compared and conditionally replaced by an
//! upsert; nothing is persisted locally.

use serde::{Deserialize, Serialize};

/// The record state this run wants published
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesiredRecord {
    /// Opaque zone identifier at the provider
    pub zone_id: String,
    /// Record name without trailing dot (e.g. "home.example.com")
    pub name: String,
    /// Record type (A, AAAA, ...)
    pub record_type: String,
    /// Desired record value (the freshly resolved public IP)
    pub value: String,
    /// Time-to-live in seconds
    pub ttl: i64,
}

impl DesiredRecord {
    /// The fully-qualified form of the record name
    ///
    /// Providers store record names with a trailing root separator;
    /// lookups must compare against this form, not the raw config name.
    pub fn fqdn(&self) -> String {
        format!("{}.", self.name.trim_end_matches('.'))
    }
}

/// The provider's current state for one (name, type) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    /// Fully-qualified record name as stored by the provider
    pub name: String,
    /// Record type
    pub record_type: String,
    /// Time-to-live, if the provider reports one
    pub ttl: Option<i64>,
    /// Resource record values, in provider order
    pub values: Vec<String>,
}

/// Change action within a change batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeAction {
    /// Update-or-insert the record set
    Upsert,
}

impl ChangeAction {
    /// Wire name of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeAction::Upsert => "UPSERT",
        }
    }
}

/// One change within a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// Action to apply
    pub action: ChangeAction,
    /// The full replacement record set
    pub record_set: RecordSet,
}

/// A batch of record set changes submitted to the provider atomically
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeBatch {
    /// Human-readable comment recorded alongside the change
    pub comment: String,
    /// Changes to apply
    pub changes: Vec<Change>,
}

impl ChangeBatch {
    /// Build a single-change UPSERT batch
    pub fn upsert(comment: impl Into<String>, record_set: RecordSet) -> Self {
        Self {
            comment: comment.into(),
            changes: vec![Change {
                action: ChangeAction::Upsert,
                record_set,
            }],
        }
    }
}

/// Provider acknowledgement of a submitted change batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeReceipt {
    /// Provider-assigned change identifier
    pub change_id: String,
    /// Provider-reported change status (e.g. "PENDING")
    pub status: String,
}
