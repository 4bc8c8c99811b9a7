// # zoneup - One-Shot DNS Updater
//
// This binary is a THIN integration layer. It sequences the run and
// nothing else; all reconciliation logic lives in zoneup-core:
//
// 1. Load and validate `config.txt` from the working directory
// 2. Initialize tracing
// 3. Resolve the current public IP (fatal on failure)
// 4. Reconcile the configured record via the Route 53 provider
// 5. Report the outcome and exit
//
// ## Configuration
//
// `config.txt`, one `key=value` per line:
//
// ```text
// hosted_zone_id=Z0123456789ABCDEFGHIJ
// record_name=home.example.com
// record_type=A
// ttl=300
// aws_access_key_id=AKIA...
// aws_secret_access_key=...
// region=us-east-1
// ```
//
// Optional: `ip_endpoint=<url>` overrides the default IP echo service.
//
// The only environment variable consulted is `ZONEUP_LOG` (trace,
// debug, info, warn, error; default info). There are no CLI flags.

use std::env;
use std::process::ExitCode;

use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

use zoneup_core::traits::IpSource;
use zoneup_core::{DesiredRecord, Error, ReconcileOutcome, Reconciler, Result, Settings};
use zoneup_ip_http::HttpIpSource;
use zoneup_provider_route53::Route53Provider;

/// Config file read from the working directory
const CONFIG_PATH: &str = "config.txt";

/// Exit codes for different termination scenarios
///
/// - 0: Clean run (record updated, already current, or absent no-op)
/// - 1: Configuration or credentials error, nothing was attempted
/// - 2: Runtime error (IP resolution or provider API failure)
#[derive(Debug, Clone, Copy)]
enum ZoneupExitCode {
    /// Clean run
    Clean = 0,
    /// Configuration or credentials error
    ConfigError = 1,
    /// Runtime error
    RuntimeError = 2,
}

impl From<ZoneupExitCode> for ExitCode {
    fn from(code: ZoneupExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

fn main() -> ExitCode {
    // Initialize tracing before anything that can fail, so failures log
    let log_level = match env::var("ZONEUP_LOG").unwrap_or_default().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return ZoneupExitCode::ConfigError.into();
    }

    // Load configuration; a config failure aborts before any network call
    let settings = match Settings::load(CONFIG_PATH) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Configuration error: {}", e);
            return ZoneupExitCode::ConfigError.into();
        }
    };

    info!(
        "Reconciling {}/{} in zone {} (ttl {}s)",
        settings.record_name, settings.record_type, settings.hosted_zone_id, settings.ttl
    );

    // Enter tokio runtime
    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return ZoneupExitCode::RuntimeError.into();
        }
    };

    match rt.block_on(run(settings)) {
        Ok(outcome) => {
            report_outcome(&outcome);
            ZoneupExitCode::Clean.into()
        }
        Err(e) => {
            error!("Run aborted: {}", e);
            exit_code_for(&e).into()
        }
    }
}

/// Sequence one updater run: resolve IP, then reconcile
async fn run(settings: Settings) -> Result<ReconcileOutcome> {
    let ip_source = match settings.ip_endpoint {
        Some(ref url) => HttpIpSource::with_url(url.clone())?,
        None => HttpIpSource::new()?,
    };

    // A resolution failure is fatal: continuing with a placeholder value
    // would corrupt the record comparison.
    let public_ip = ip_source.current().await?;
    info!("Current public IP: {}", public_ip);

    let desired = DesiredRecord {
        zone_id: settings.hosted_zone_id,
        name: settings.record_name,
        record_type: settings.record_type,
        value: public_ip.to_string(),
        ttl: settings.ttl,
    };

    let provider = Route53Provider::new(&settings.credentials)?;
    let reconciler = Reconciler::new(Box::new(provider));

    reconciler.reconcile(&desired).await
}

/// Human-readable summary of the run
fn report_outcome(outcome: &ReconcileOutcome) {
    match outcome {
        ReconcileOutcome::Unchanged { current } => {
            info!("Record already publishes {}; nothing to do", current);
        }
        ReconcileOutcome::Updated {
            previous,
            new_value,
            change_id,
        } => {
            info!(
                "Record updated: {} -> {} (change {})",
                previous.as_deref().unwrap_or("<none>"),
                new_value,
                change_id
            );
        }
        ReconcileOutcome::RecordAbsent => {
            warn!("Record does not exist in the zone; left untouched");
        }
    }
}

/// Map an error kind onto the process exit code
fn exit_code_for(err: &Error) -> ZoneupExitCode {
    match err {
        Error::Config(_) | Error::Credentials(_) => ZoneupExitCode::ConfigError,
        _ => ZoneupExitCode::RuntimeError,
    }
}
