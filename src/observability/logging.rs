use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Directives used when `RUST_LOG` is not set.
pub const DEFAULT_DIRECTIVES: &str = "weather_time_agent=debug,tool=info";

/// Install a stderr fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_DIRECTIVES`] on top of a `warn` baseline.
///
/// Does nothing if a global subscriber is already set.
pub fn init_default_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::builder()
            .with_default_directive(tracing::Level::WARN.into())
            .parse_lossy(DEFAULT_DIRECTIVES)
    });

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_span_events(fmt::format::FmtSpan::CLOSE);

    let _ = Registry::default().with(filter).with(fmt_layer).try_init();
}
