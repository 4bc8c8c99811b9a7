//! Test doubles and common utilities for reconciliation tests
//!
//! Provides a scriptable DnsProvider that records every call, so tests
//! can assert exactly how many lookups and mutations a reconciliation
//! run issued. Counters and state live behind Arcs so a test can keep a
//! handle after moving the provider into the reconciler.

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use zoneup_core::error::{Error, Result};
use zoneup_core::record::{ChangeBatch, ChangeReceipt, DesiredRecord, RecordSet};
use zoneup_core::traits::DnsProvider;

/// A scriptable DnsProvider that serves canned record sets and records calls
pub struct ScriptedProvider {
    /// Record sets returned by list_record_sets
    record_sets: Arc<Mutex<Vec<RecordSet>>>,
    /// If set, list_record_sets fails with this credentials message
    auth_failure: Option<String>,
    /// Call counter for list_record_sets()
    list_call_count: Arc<AtomicUsize>,
    /// Recorded change batches from change_record_sets()
    submitted_batches: Arc<Mutex<Vec<ChangeBatch>>>,
}

impl ScriptedProvider {
    /// Provider that answers the lookup with the given record sets
    pub fn serving(record_sets: Vec<RecordSet>) -> Self {
        Self {
            record_sets: Arc::new(Mutex::new(record_sets)),
            auth_failure: None,
            list_call_count: Arc::new(AtomicUsize::new(0)),
            submitted_batches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Provider whose lookup is rejected for bad credentials
    pub fn rejecting_credentials(message: &str) -> Self {
        Self {
            record_sets: Arc::new(Mutex::new(Vec::new())),
            auth_failure: Some(message.to_string()),
            list_call_count: Arc::new(AtomicUsize::new(0)),
            submitted_batches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a provider that shares state and counters with this one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            record_sets: Arc::clone(&other.record_sets),
            auth_failure: other.auth_failure.clone(),
            list_call_count: Arc::clone(&other.list_call_count),
            submitted_batches: Arc::clone(&other.submitted_batches),
        }
    }

    /// Number of times list_record_sets() was called
    pub fn list_call_count(&self) -> usize {
        self.list_call_count.load(Ordering::SeqCst)
    }

    /// Change batches submitted via change_record_sets()
    pub fn submitted_batches(&self) -> Vec<ChangeBatch> {
        self.submitted_batches.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DnsProvider for ScriptedProvider {
    async fn list_record_sets(
        &self,
        _zone_id: &str,
        _start_name: &str,
        _start_type: &str,
        max_items: i32,
    ) -> Result<Vec<RecordSet>> {
        self.list_call_count.fetch_add(1, Ordering::SeqCst);

        if let Some(ref message) = self.auth_failure {
            return Err(Error::credentials(message.clone()));
        }

        let sets = self.record_sets.lock().unwrap();
        Ok(sets.iter().take(max_items as usize).cloned().collect())
    }

    async fn change_record_sets(
        &self,
        _zone_id: &str,
        batch: &ChangeBatch,
    ) -> Result<ChangeReceipt> {
        self.submitted_batches.lock().unwrap().push(batch.clone());

        // Mimic the provider applying the upsert, so a second
        // reconciliation run observes the new value.
        let mut sets = self.record_sets.lock().unwrap();
        for change in &batch.changes {
            let fqdn = format!("{}.", change.record_set.name.trim_end_matches('.'));
            if let Some(existing) = sets.iter_mut().find(|rs| rs.name == fqdn) {
                existing.values = change.record_set.values.clone();
                existing.ttl = change.record_set.ttl;
            }
        }

        Ok(ChangeReceipt {
            change_id: "/change/C-TEST".to_string(),
            status: "PENDING".to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

/// Record set helper for test fixtures
pub fn record_set(name: &str, record_type: &str, values: &[&str]) -> RecordSet {
    RecordSet {
        name: name.to_string(),
        record_type: record_type.to_string(),
        ttl: Some(300),
        values: values.iter().map(|v| v.to_string()).collect(),
    }
}

/// Desired record helper for test fixtures
pub fn desired(name: &str, value: &str) -> DesiredRecord {
    DesiredRecord {
        zone_id: "Z1".to_string(),
        name: name.to_string(),
        record_type: "A".to_string(),
        value: value.to_string(),
        ttl: 300,
    }
}
