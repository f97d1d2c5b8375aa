use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber: JSON file log, console log filtered by
/// `RUST_LOG`, and an OpenTelemetry bridge outside dev mode.
pub struct Logger {
    _provider: Option<SdkLoggerProvider>,
}

impl Logger {
    pub fn new(component: &str, is_dev: bool) -> Self {
        let log_dir = if is_dev { "./logs" } else { "/var/log/crm" };
        let file_name = format!("crm_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, guard) = non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let console_layer = fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_ansi(true)
            .with_filter(console_filter);

        let registry = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        let provider = if !is_dev {
            Some(SdkLoggerProvider::builder().build())
        } else {
            None
        };

        if let Some(provider) = &provider {
            let otel_filter = EnvFilter::try_new("info,hyper=off,opentelemetry=off,sqlx=off,h2=off")
                .unwrap_or_else(|_| EnvFilter::new("info"));

            registry
                .with(OpenTelemetryTracingBridge::new(provider).with_filter(otel_filter))
                .init();
        } else {
            registry.init();
        }

        // the writer must outlive every span; the process owns it until exit
        std::mem::forget(guard);

        Self {
            _provider: provider,
        }
    }
}
