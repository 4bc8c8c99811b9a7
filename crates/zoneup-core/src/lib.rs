// # zoneup-core
//
// Core library for the zoneup one-shot dynamic DNS updater.
//
// ## Architecture Overview
//
// This library provides everything the updater needs except the actual
// network backends:
// - **IpSource**: Trait for resolving the caller's current public IP
// - **DnsProvider**: Trait for querying and mutating provider record sets
// - **Reconciler**: The conditional record-reconciliation procedure
// - **Settings**: Flat `key=value` config file loading and validation
//
// ## Design Principles
//
// 1. **Run-to-completion**: One invocation performs at most one lookup
//    and one conditional upsert, then exits. No daemon loop, no retries,
//    no local state.
// 2. **Injected collaborators**: Both network edges (IP echo service and
//    DNS management API) sit behind traits so the reconciliation logic
//    is unit-testable without network access.
// 3. **Explicit errors**: Every failure path returns a typed error; the
//    entrypoint derives the process exit status from it. Nothing logs
//    and silently continues.

pub mod config;
pub mod error;
pub mod reconcile;
pub mod record;
pub mod traits;

// Re-export core types for convenience
pub use config::{Credentials, Settings};
pub use error::{Error, Result};
pub use reconcile::{ReconcileOutcome, Reconciler};
pub use record::{Change, ChangeAction, ChangeBatch, ChangeReceipt, DesiredRecord, RecordSet};
pub use traits::{DnsProvider, IpSource};
