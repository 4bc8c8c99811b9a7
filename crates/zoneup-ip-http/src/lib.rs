// # HTTP IP Source
//
// This crate resolves the caller's public IP via an external echo
// service. One GET per run; the service answers a JSON body containing
// an `ip` field:
//
// ```json
// {"ip": "203.0.113.7"}
// ```
//
// No retries and no failover between services; a failed resolution is a
// fatal `Error::Network` at the call site. The updater must never
// proceed to the record comparison with a placeholder IP.

use std::net::IpAddr;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use zoneup_core::traits::IpSource;
use zoneup_core::{Error, Result};

/// Default IP echo endpoint (JSON mode)
pub const DEFAULT_IP_ENDPOINT: &str = "https://api.ipify.org?format=json";

/// HTTP request timeout
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// JSON body answered by the echo service; only `ip` is consumed
#[derive(Debug, Deserialize)]
struct IpEchoBody {
    ip: String,
}

/// HTTP-based public IP source
pub struct HttpIpSource {
    /// Echo endpoint URL
    url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpIpSource {
    /// Create a source against the default echo endpoint
    pub fn new() -> Result<Self> {
        Self::with_url(DEFAULT_IP_ENDPOINT)
    }

    /// Create a source against a custom echo endpoint
    ///
    /// The endpoint must answer a JSON body with an `ip` field. Fails
    /// with [`Error::Network`] if the HTTP client cannot be built.
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait::async_trait]
impl IpSource for HttpIpSource {
    async fn current(&self) -> Result<IpAddr> {
        debug!("Resolving public IP via {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::network(format!("IP echo request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::network(format!(
                "IP echo service answered {}",
                response.status()
            )));
        }

        let body: IpEchoBody = response
            .json()
            .await
            .map_err(|e| Error::network(format!("IP echo body is not the expected JSON: {}", e)))?;

        let ip: IpAddr = body.ip.trim().parse().map_err(|_| {
            Error::network(format!("IP echo service returned non-IP value '{}'", body.ip))
        })?;

        debug!("Resolved public IP: {}", ip);
        Ok(ip)
    }
}
