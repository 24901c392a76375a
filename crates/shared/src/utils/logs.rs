use tracing_appender::{
    non_blocking::WorkerGuard,
    non_blocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. The returned guard must be held for the
/// lifetime of the process or buffered file log lines are dropped.
pub fn init_logger(component: &str, is_dev: bool, enable_file: bool) -> Option<WorkerGuard> {
    let (pretty_layer, json_layer) = if is_dev {
        let layer = fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_ansi(true);
        (Some(layer), None)
    } else {
        let layer = fmt::layer().json().with_current_span(true);
        (None, Some(layer))
    };

    let (file_layer, guard) = if enable_file {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };
        let file_name = format!("rust_app_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, guard) = non_blocking(file_appender);

        let layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(pretty_layer.with_filter(console_filter()))
        .with(json_layer.with_filter(console_filter()))
        .with(file_layer)
        .init();

    guard
}

fn console_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
