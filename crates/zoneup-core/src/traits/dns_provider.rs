// # DNS Provider Trait
//
// Defines the interface to the DNS management API.
//
// ## Implementations
//
// - Route 53: `zoneup-provider-route53` crate
// - Future: Cloudflare, DigitalOcean, etc.
//
// ## Trust boundary
//
// Providers are thin API adapters. They translate between the neutral
// record model and their wire format, and nothing else:
//
// - They do not decide whether an update is needed (owned by `Reconciler`)
// - They do not retry or back off (a failed call is surfaced as an error
//   and the run aborts; retrying is an explicit non-goal)
// - They hold no state beyond the client handle

use async_trait::async_trait;

use crate::record::{ChangeBatch, ChangeReceipt, RecordSet};

/// Trait for DNS provider implementations
///
/// Implementations must be thread-safe and usable across async tasks.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// List record sets starting at a (name, type) cursor
    ///
    /// This is a range query, not an exact lookup: the provider may
    /// return the record set whose name ordinally follows or equals the
    /// start cursor. Callers must filter for an exact name match and
    /// ignore any "next" record the range query happens to return.
    ///
    /// # Parameters
    ///
    /// - `zone_id`: Zone to query
    /// - `start_name`: Record name cursor (no trailing dot required)
    /// - `start_type`: Record type cursor
    /// - `max_items`: Upper bound on returned record sets
    async fn list_record_sets(
        &self,
        zone_id: &str,
        start_name: &str,
        start_type: &str,
        max_items: i32,
    ) -> Result<Vec<RecordSet>, crate::Error>;

    /// Submit a change batch against a zone
    ///
    /// # Returns
    ///
    /// The provider's acknowledgement, carrying the change id.
    async fn change_record_sets(
        &self,
        zone_id: &str,
        batch: &ChangeBatch,
    ) -> Result<ChangeReceipt, crate::Error>;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}
