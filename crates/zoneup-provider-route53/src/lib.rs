// # Route 53 DNS Provider
//
// Implements the `DnsProvider` trait over the Amazon Route 53
// management API, which is the backend this updater's config file
// speaks: hosted zone IDs, access-key credentials and UPSERT change
// batches are Route 53 vocabulary.
//
// ## Scope
//
// - Translates between the neutral record model and the SDK types
// - Classifies SDK failures: authentication/authorization error codes
//   surface as `Error::Credentials`, everything else as
//   `Error::Provider`
// - No retry, no backoff, no caching: one API call per trait call, the
//   reconciler owns all decisions
//
// ## Credentials
//
// The client is built from the static credentials in the config file.
// There is deliberately no fallback to the ambient AWS environment
// (env vars, profiles, instance metadata); a run uses exactly the
// credentials it was configured with, or fails.

use async_trait::async_trait;
use tracing::debug;

use aws_sdk_route53::Client;
use aws_sdk_route53::config::{BehaviorVersion, Credentials as SdkCredentials, Region};
use aws_sdk_route53::error::{BuildError, ProvideErrorMetadata, SdkError};
use aws_sdk_route53::types as r53;

use zoneup_core::config::Credentials;
use zoneup_core::record::{ChangeAction, ChangeBatch, ChangeReceipt, RecordSet};
use zoneup_core::traits::DnsProvider;
use zoneup_core::{Error, Result};

/// Error codes Route 53 answers for bad or insufficient credentials
const AUTH_ERROR_CODES: &[&str] = &[
    "InvalidClientTokenId",
    "UnrecognizedClientException",
    "SignatureDoesNotMatch",
    "MissingAuthenticationToken",
    "ExpiredToken",
    "AccessDenied",
    "AccessDeniedException",
];

/// Route 53 DNS provider
///
/// The SDK client's own `Debug` impl redacts credential material.
#[derive(Debug)]
pub struct Route53Provider {
    /// SDK client, already carrying credentials and region
    client: Client,
}

impl Route53Provider {
    /// Create a provider from explicit credentials
    ///
    /// Missing or partial credentials are rejected here, before any
    /// API call is attempted.
    pub fn new(credentials: &Credentials) -> Result<Self> {
        credentials.validate()?;

        let sdk_credentials = SdkCredentials::new(
            credentials.access_key_id.clone(),
            credentials.secret_access_key.clone(),
            None,
            None,
            "zoneup-config-file",
        );

        let config = aws_sdk_route53::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(credentials.region.clone()))
            .credentials_provider(sdk_credentials)
            .build();

        Ok(Self {
            client: Client::from_conf(config),
        })
    }
}

#[async_trait]
impl DnsProvider for Route53Provider {
    async fn list_record_sets(
        &self,
        zone_id: &str,
        start_name: &str,
        start_type: &str,
        max_items: i32,
    ) -> Result<Vec<RecordSet>> {
        debug!(
            "ListResourceRecordSets zone={} start={}/{} max={}",
            zone_id, start_name, start_type, max_items
        );

        let output = self
            .client
            .list_resource_record_sets()
            .hosted_zone_id(zone_id)
            .start_record_name(start_name)
            .start_record_type(r53::RrType::from(start_type))
            .max_items(max_items)
            .send()
            .await
            .map_err(|e| classify_sdk_error("record set lookup", e))?;

        Ok(output
            .resource_record_sets()
            .iter()
            .map(to_neutral_record_set)
            .collect())
    }

    async fn change_record_sets(
        &self,
        zone_id: &str,
        batch: &ChangeBatch,
    ) -> Result<ChangeReceipt> {
        debug!(
            "ChangeResourceRecordSets zone={} changes={}",
            zone_id,
            batch.changes.len()
        );

        let sdk_batch = to_sdk_change_batch(batch)?;

        let output = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(sdk_batch)
            .send()
            .await
            .map_err(|e| classify_sdk_error("record set change", e))?;

        let info = output.change_info().ok_or_else(|| {
            Error::provider("route53", "change accepted but no change info returned")
        })?;

        Ok(ChangeReceipt {
            change_id: info.id().to_string(),
            status: info.status().as_str().to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "route53"
    }
}

/// Convert an SDK record set into the neutral model
fn to_neutral_record_set(rs: &r53::ResourceRecordSet) -> RecordSet {
    RecordSet {
        name: rs.name().to_string(),
        record_type: rs.r#type().as_str().to_string(),
        ttl: rs.ttl(),
        values: rs
            .resource_records()
            .iter()
            .map(|rr| rr.value().to_string())
            .collect(),
    }
}

/// Convert a neutral change batch into SDK types
fn to_sdk_change_batch(batch: &ChangeBatch) -> Result<r53::ChangeBatch> {
    let mut changes = Vec::with_capacity(batch.changes.len());

    for change in &batch.changes {
        let action = match change.action {
            ChangeAction::Upsert => r53::ChangeAction::Upsert,
        };

        let mut record_set = r53::ResourceRecordSet::builder()
            .name(&change.record_set.name)
            .r#type(r53::RrType::from(change.record_set.record_type.as_str()));

        if let Some(ttl) = change.record_set.ttl {
            record_set = record_set.ttl(ttl);
        }

        for value in &change.record_set.values {
            record_set = record_set
                .resource_records(r53::ResourceRecord::builder().value(value).build().map_err(build_error)?);
        }

        changes.push(
            r53::Change::builder()
                .action(action)
                .resource_record_set(record_set.build().map_err(build_error)?)
                .build()
                .map_err(build_error)?,
        );
    }

    r53::ChangeBatch::builder()
        .comment(&batch.comment)
        .set_changes(Some(changes))
        .build()
        .map_err(build_error)
}

fn build_error(err: BuildError) -> Error {
    Error::provider("route53", format!("invalid change request: {}", err))
}

/// Map an SDK failure onto the updater's error kinds
///
/// Authentication and authorization codes become `Error::Credentials`
/// so the entrypoint can report them distinctly; everything else
/// (throttling, validation, transport) is a provider error.
fn classify_sdk_error<E, R>(op: &str, err: SdkError<E, R>) -> Error
where
    E: ProvideErrorMetadata,
{
    let code = err.code().map(str::to_owned);
    let detail = match (code.as_deref(), err.message()) {
        (Some(code), Some(message)) => format!("{}: {}", code, message),
        (Some(code), None) => code.to_string(),
        (None, Some(message)) => message.to_string(),
        (None, None) => err.to_string(),
    };

    match code.as_deref() {
        Some(code) if AUTH_ERROR_CODES.contains(&code) => {
            Error::credentials(format!("{} rejected: {}", op, detail))
        }
        _ => Error::provider("route53", format!("{} failed: {}", op, detail)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            access_key_id: "AKIAEXAMPLE".to_string(),
            secret_access_key: "secret".to_string(),
            region: "us-east-1".to_string(),
        }
    }

    #[test]
    fn provider_construction_succeeds_with_full_credentials() {
        let provider = Route53Provider::new(&credentials());
        assert!(provider.is_ok());
    }

    #[test]
    fn partial_credentials_are_rejected_before_any_call() {
        let mut creds = credentials();
        creds.secret_access_key = String::new();

        let err = Route53Provider::new(&creds).unwrap_err();
        assert!(matches!(err, Error::Credentials(_)), "got {:?}", err);
    }

    #[test]
    fn debug_output_does_not_expose_the_secret_key() {
        let mut creds = credentials();
        creds.secret_access_key = "hunter2-key-material".to_string();

        let provider = Route53Provider::new(&creds).unwrap();
        let debug_str = format!("{:?}", provider);
        assert!(debug_str.contains("Route53Provider"));
        assert!(!debug_str.contains("hunter2"));
    }

    #[test]
    fn provider_name_is_route53() {
        let provider = Route53Provider::new(&credentials()).unwrap();
        assert_eq!(provider.provider_name(), "route53");
    }

    #[test]
    fn neutral_record_set_round_trips_from_sdk_type() {
        let sdk_rs = r53::ResourceRecordSet::builder()
            .name("home.example.com.")
            .r#type(r53::RrType::A)
            .ttl(300)
            .resource_records(
                r53::ResourceRecord::builder()
                    .value("1.2.3.4")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        let neutral = to_neutral_record_set(&sdk_rs);
        assert_eq!(neutral.name, "home.example.com.");
        assert_eq!(neutral.record_type, "A");
        assert_eq!(neutral.ttl, Some(300));
        assert_eq!(neutral.values, vec!["1.2.3.4".to_string()]);
    }

    #[test]
    fn upsert_batch_converts_to_sdk_types() {
        let batch = ChangeBatch::upsert(
            "test",
            RecordSet {
                name: "home.example.com".to_string(),
                record_type: "A".to_string(),
                ttl: Some(300),
                values: vec!["5.6.7.8".to_string()],
            },
        );

        let sdk_batch = to_sdk_change_batch(&batch).unwrap();
        assert_eq!(sdk_batch.comment(), Some("test"));

        let changes = sdk_batch.changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].action(), &r53::ChangeAction::Upsert);

        let rs = changes[0].resource_record_set().unwrap();
        assert_eq!(rs.name(), "home.example.com");
        assert_eq!(rs.ttl(), Some(300));
        assert_eq!(rs.resource_records().len(), 1);
        assert_eq!(rs.resource_records()[0].value(), "5.6.7.8");
    }
}
