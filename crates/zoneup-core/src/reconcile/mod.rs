//! Conditional record reconciliation
//!
//! The Reconciler owns the one meaningful decision in this system:
//! given the desired record state and whatever the provider currently
//! publishes, issue an upsert only when the published value differs.
//!
//! ## Flow
//!
//! ```text
//! ┌───────────────┐   list_record_sets    ┌──────────────┐
//! │  Reconciler   │──────────────────────▶│ DnsProvider  │
//! └───────────────┘                       └──────────────┘
//!         │ exact-name match? value differs?       ▲
//!         └────────── change_record_sets ──────────┘
//!                     (one UPSERT, only on diff)
//! ```
//!
//! ## Comparison policy
//!
//! Only the first value of a matching record set is compared against the
//! desired value. A multi-value record set whose non-first value differs
//! is reported as `Unchanged`. This narrow comparison is preserved
//! behavior, kept explicit here because changing it changes what the
//! updater mutates.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::record::{ChangeBatch, DesiredRecord, RecordSet};
use crate::traits::DnsProvider;

/// Comment attached to every change batch this updater submits
const CHANGE_COMMENT: &str = "zoneup: reconciling record with current public IP";

/// Outcome of one reconciliation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Published value already matches; no mutation issued
    Unchanged {
        /// The value currently published
        current: String,
    },

    /// One UPSERT was submitted and acknowledged
    Updated {
        /// The previously published first value, if any
        previous: Option<String>,
        /// The value now being published
        new_value: String,
        /// Provider-assigned change identifier
        change_id: String,
    },

    /// No record set with the exact desired name exists; the zone is
    /// left untouched (preserved policy: absence does not create)
    RecordAbsent,
}

/// Drives the lookup → compare → conditional upsert sequence
///
/// Holds the provider as a boxed trait object so the algorithm is
/// testable against a mock without network access. Calling
/// [`Reconciler::reconcile`] repeatedly with the same desired record and
/// no external change is idempotent: every call after a successful
/// update reports `Unchanged`.
pub struct Reconciler {
    /// DNS provider backend
    provider: Box<dyn DnsProvider>,
}

impl Reconciler {
    /// Create a reconciler over a provider backend
    pub fn new(provider: Box<dyn DnsProvider>) -> Self {
        Self { provider }
    }

    /// Reconcile the published record with the desired state
    ///
    /// Issues at most one `change_record_sets` call, and only after the
    /// lookup proves the published first value differs. Any provider or
    /// credential failure aborts with no partial mutation: the lookup
    /// and the upsert are independent calls and the upsert is only built
    /// after a successful comparison.
    pub async fn reconcile(&self, desired: &DesiredRecord) -> Result<ReconcileOutcome> {
        debug!(
            "Looking up record set {}/{} in zone {} via {}",
            desired.name,
            desired.record_type,
            desired.zone_id,
            self.provider.provider_name()
        );

        let record_sets = self
            .provider
            .list_record_sets(&desired.zone_id, &desired.name, &desired.record_type, 1)
            .await?;

        // The lookup is a range query: it may return the record set that
        // ordinally follows the cursor. Only an exact fully-qualified
        // name match is eligible; anything else is ignored.
        let fqdn = desired.fqdn();
        let Some(current) = record_sets.iter().find(|rs| rs.name == fqdn) else {
            warn!(
                "No record set named {} in zone {}; leaving zone untouched",
                fqdn, desired.zone_id
            );
            return Ok(ReconcileOutcome::RecordAbsent);
        };

        // First-value-only comparison, preserved as documented above.
        let previous = current.values.first().cloned();
        if previous.as_deref() == Some(desired.value.as_str()) {
            info!(
                "Record {} already publishes {}, no update required",
                fqdn, desired.value
            );
            return Ok(ReconcileOutcome::Unchanged {
                current: desired.value.clone(),
            });
        }

        info!(
            "Record {} publishes {:?}, updating to {}",
            fqdn, previous, desired.value
        );

        let batch = ChangeBatch::upsert(
            CHANGE_COMMENT,
            RecordSet {
                name: desired.name.clone(),
                record_type: desired.record_type.clone(),
                ttl: Some(desired.ttl),
                values: vec![desired.value.clone()],
            },
        );

        let receipt = self
            .provider
            .change_record_sets(&desired.zone_id, &batch)
            .await?;

        info!(
            "Upsert acknowledged: change {} ({})",
            receipt.change_id, receipt.status
        );

        Ok(ReconcileOutcome::Updated {
            previous,
            new_value: desired.value.clone(),
            change_id: receipt.change_id,
        })
    }
}
