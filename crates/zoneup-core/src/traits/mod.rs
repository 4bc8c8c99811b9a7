//! Core traits for the zoneup updater
//!
//! This module defines the abstract interfaces for the two network
//! collaborators. The reconciliation logic depends only on these traits,
//! never on a concrete backend.
//!
//! - [`IpSource`]: Resolve the caller's current public IP
//! - [`DnsProvider`]: Query and mutate provider record sets

pub mod dns_provider;
pub mod ip_source;

pub use dns_provider::DnsProvider;
pub use ip_source::IpSource;
