// # IP Source Trait
//
// Defines the interface for resolving the caller's current public IP.
//
// ## Implementations
//
// - HTTP echo service: `zoneup-ip-http` crate
//
// The updater runs once per invocation, so the trait exposes only a
// point-in-time lookup. A failure here is fatal to the run: proceeding
// without a resolved IP would corrupt the record comparison.

use async_trait::async_trait;
use std::net::IpAddr;

/// Trait for public IP resolution
///
/// Implementations must be thread-safe and usable across async tasks.
#[async_trait]
pub trait IpSource: Send + Sync {
    /// Resolve the current public IP address
    ///
    /// # Returns
    ///
    /// - `Ok(IpAddr)`: The current public IP
    /// - `Err(Error)`: If the IP cannot be determined; callers must
    ///   abort rather than continue with a placeholder value
    async fn current(&self) -> Result<IpAddr, crate::Error>;
}
