use inspectkit_core::{LevelSink, LogLevel};
use std::sync::{Arc, OnceLock};
use tracing::Subscriber;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, reload};

/// Swaps the live filter when the logging level changes.
pub struct ReloadSink {
    handle: reload::Handle<EnvFilter, Registry>,
}

impl LevelSink for ReloadSink {
    fn apply(&self, level: LogLevel) -> Result<(), String> {
        self.handle
            .reload(EnvFilter::new(level.as_filter_directive()))
            .map_err(|err| err.to_string())
    }
}

/// Installs the stderr subscriber once.
///
/// `RUST_LOG` takes precedence over `initial`; in that case no sink is
/// returned and later level changes only update the inspector's context.
pub fn init_tracing(initial: LogLevel) -> Option<Arc<dyn LevelSink>> {
    static SINK: OnceLock<Option<Arc<ReloadSink>>> = OnceLock::new();
    SINK.get_or_init(|| install(initial))
        .clone()
        .map(|sink| sink as Arc<dyn LevelSink>)
}

fn stderr_layer<S>() -> impl Layer<S> + Send + Sync + 'static
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
}

fn install(initial: LogLevel) -> Option<Arc<ReloadSink>> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer())
            .try_init();
        return None;
    }

    let (filter, handle) = reload::Layer::new(EnvFilter::new(initial.as_filter_directive()));
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer())
        .try_init()
        .ok()?;
    Some(Arc::new(ReloadSink { handle }))
}
