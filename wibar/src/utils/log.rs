use tracing::{Subscriber, metadata::LevelFilter};
use tracing_subscriber::{EnvFilter, filter::ParseError, layer::SubscriberExt};

/// Builds the subscriber for a `RUST_LOG` style directive string. An
/// unparsable string falls back to `debug` and the error is handed back.
#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber + Send + Sync, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::new("debug")
        });
    (get_subscribers(filter), parse_err)
}

pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
}

/// Installs the global subscriber. `RUST_LOG` wins over `fallback`.
pub fn setup_logging(fallback: &str) {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| fallback.to_string());
    let (subscriber, parse_err) = parse_log_level(&level);
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to setup logging: {err}");
        return;
    }
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log filter {:?}: {}", level, err);
    }
}
