//! Configuration loading for the zoneup updater
//!
//! The config source is a flat text file, one `key=value` assignment per
//! line. Whitespace around keys and values is trimmed. A line that does
//! not contain `=` is a fatal parse error; the run must never proceed
//! with a partial config.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};

/// Required config keys, checked for presence and non-emptiness after parse
const REQUIRED_KEYS: &[&str] = &[
    "hosted_zone_id",
    "record_name",
    "record_type",
    "ttl",
    "aws_access_key_id",
    "aws_secret_access_key",
    "region",
];

/// Provider credentials, passed through opaquely
///
/// The access key, secret and region are never interpreted locally;
/// they exist only to construct the provider client.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Access key identifier
    pub access_key_id: String,

    /// Access key secret
    /// ⚠️ NEVER log this value
    pub secret_access_key: String,

    /// Provider region
    pub region: String,
}

impl Credentials {
    /// Reject missing or partial credentials before any provider call
    pub fn validate(&self) -> Result<()> {
        if self.access_key_id.is_empty() {
            return Err(Error::credentials("access key id is missing"));
        }
        if self.secret_access_key.is_empty() {
            return Err(Error::credentials("secret access key is missing"));
        }
        if self.region.is_empty() {
            return Err(Error::credentials("region is missing"));
        }
        Ok(())
    }
}

// Custom Debug implementation that hides the secret key
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<REDACTED>")
            .field("region", &self.region)
            .finish()
    }
}

/// Validated settings for one updater run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Opaque zone identifier at the DNS provider
    pub hosted_zone_id: String,

    /// Fully-qualified record name, no trailing dot (e.g. "home.example.com")
    pub record_name: String,

    /// Record type (A, AAAA, ...)
    pub record_type: String,

    /// Record time-to-live in seconds, positive
    pub ttl: i64,

    /// Provider credentials
    pub credentials: Credentials,

    /// Optional override for the public IP echo endpoint
    pub ip_endpoint: Option<String>,
}

impl Settings {
    /// Load and validate settings from a `key=value` config file
    ///
    /// Fails with [`Error::Config`] if the file cannot be read, a line
    /// cannot be split into key and value, a required key is missing or
    /// empty, or `ttl` is not a positive integer.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("cannot read config file {}: {}", path.display(), e))
        })?;

        let map = parse_key_values(&text)?;
        Self::from_map(map)
    }

    /// Build settings from a parsed key/value mapping
    pub fn from_map(map: HashMap<String, String>) -> Result<Self> {
        for key in REQUIRED_KEYS {
            match map.get(*key) {
                None => {
                    return Err(Error::config(format!("missing required key '{}'", key)));
                }
                Some(value) if value.is_empty() => {
                    return Err(Error::config(format!("key '{}' has an empty value", key)));
                }
                Some(_) => {}
            }
        }

        let ttl_raw = &map["ttl"];
        let ttl: i64 = ttl_raw
            .parse()
            .map_err(|_| Error::config(format!("ttl '{}' is not an integer", ttl_raw)))?;
        if ttl <= 0 {
            return Err(Error::config(format!("ttl must be positive, got {}", ttl)));
        }

        Ok(Self {
            hosted_zone_id: map["hosted_zone_id"].clone(),
            record_name: map["record_name"].clone(),
            record_type: map["record_type"].clone(),
            ttl,
            credentials: Credentials {
                access_key_id: map["aws_access_key_id"].clone(),
                secret_access_key: map["aws_secret_access_key"].clone(),
                region: map["region"].clone(),
            },
            ip_endpoint: map.get("ip_endpoint").cloned(),
        })
    }
}

/// Parse flat `key=value` text into a string mapping
///
/// Each non-empty line splits on the first `=` (values may themselves
/// contain `=`, e.g. URLs with query strings). Keys and values are
/// trimmed. A line without `=` is a fatal [`Error::Config`].
pub fn parse_key_values(text: &str) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();

    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(Error::config(format!(
                "line {} is not a key=value assignment: '{}'",
                lineno + 1,
                line
            )));
        };

        map.insert(key.trim().to_string(), value.trim().to_string());
    }

    Ok(map)
}
