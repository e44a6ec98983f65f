use fathom_types::constants::{DEFAULT_APP_NAME, DEFAULT_LOG_FILTER};
use fathom_types::models::telemetry::TelemetryConfig;
use fathom_types::tracing::{debug, Subscriber};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

// Init telemetry by setting a global handler
pub fn init_telemetry(app_name: Option<&str>, telemetry_config: Option<TelemetryConfig>) {
    let app_name = app_name.unwrap_or(DEFAULT_APP_NAME);
    let config = telemetry_config.unwrap_or_default();

    // A second call (tests, embedding hosts) keeps the first subscriber.
    if tracing_subscriber::registry()
        .with(fmt_layer::<Registry>(&config))
        .try_init()
        .is_ok()
    {
        debug!("Initialized telemetry for {app_name}: {config:?}");
    }
}

// Init telemetry with a closure without setting a global subscriber
pub fn init_telemetry_closure<T>(
    app_name: Option<&str>,
    telemetry_config: Option<TelemetryConfig>,
    closure: impl FnOnce() -> T,
) -> T {
    let app_name = app_name.unwrap_or(DEFAULT_APP_NAME);
    let config = telemetry_config.unwrap_or_default();

    let subscriber = tracing_subscriber::registry().with(fmt_layer::<Registry>(&config));

    fathom_types::tracing::subscriber::with_default(subscriber, || {
        debug!("Initialized scoped telemetry for {app_name}");
        closure()
    })
}

fn fmt_layer<S>(config: &TelemetryConfig) -> impl Layer<S>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.with_target)
        .with_ansi(config.ansi)
        .with_filter(env_filter(config))
}

fn env_filter(config: &TelemetryConfig) -> EnvFilter {
    let fallback = config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER);
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
