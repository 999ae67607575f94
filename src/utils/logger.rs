use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HOST_LEVEL: &str = "warn";

/// Default directives cover the library and the `print-number` binary,
/// which is compiled as its own crate.
pub fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("example_library={level},print_number={level}"))
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level))
}

pub(crate) fn host_subscriber<W>(filter: EnvFilter, writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_target(false)
            .compact(),
    )
}

pub fn init_cli_logger(logging: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = build_filter(level);

    // stdout belongs to print_number, logs go to stderr
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match logging.format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.compact())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init(),
    }
}

/// Installs a subscriber for use inside a host process. Returns `false` when
/// the host (or an earlier import) already installed one.
pub fn init_host_logger() -> bool {
    host_subscriber(build_filter(HOST_LEVEL), std::io::stderr)
        .try_init()
        .is_ok()
}
