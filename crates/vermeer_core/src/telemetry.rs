//! OpenTelemetry bridge for tracing spans.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::{
    trace::{RandomIdGenerator, Sampler, TracerProvider},
    Resource,
};
use opentelemetry_stdout::SpanExporter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install a subscriber that prints logs and exports spans to stdout.
///
/// `service_name` becomes the `service.name` resource attribute. The filter
/// follows `RUST_LOG`, falling back to `default_directive`.
///
/// # Errors
///
/// Returns error if the directive is invalid or a global subscriber is
/// already installed.
pub fn init_telemetry(
    service_name: &'static str,
    default_directive: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = || {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_directive))
    };

    let provider = TracerProvider::builder()
        .with_simple_exporter(SpanExporter::default())
        .with_id_generator(RandomIdGenerator::default())
        .with_sampler(Sampler::AlwaysOn)
        .with_resource(Resource::new(vec![KeyValue::new(
            "service.name",
            service_name,
        )]))
        .build();

    let tracer = provider.tracer(service_name);
    opentelemetry::global::set_tracer_provider(provider);

    let telemetry_layer = tracing_opentelemetry::layer()
        .with_tracer(tracer)
        .with_filter(filter()?);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(filter()?);

    tracing_subscriber::registry()
        .with(telemetry_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Flush pending spans. Call before exit.
pub fn shutdown_telemetry() {
    opentelemetry::global::shutdown_tracer_provider();
}
