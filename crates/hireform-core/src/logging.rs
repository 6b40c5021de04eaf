//! Logging integration for hireform.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-form spans.

use crate::settings::Settings;

/// Target of the form crate's event logs.
const FORMS_TARGET: &str = "hireform_forms";

/// Sets up the global tracing subscriber based on the given settings.
///
/// In debug mode form events are logged at `debug` in a pretty format;
/// otherwise output is JSON with each line carrying its form span.
/// Installing a second subscriber is a no-op.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;

    let filter = build_filter(settings);
    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .try_init()
            .ok();
    }
}

/// Builds the filter from `settings.log_level`.
///
/// An unparseable directive falls back to `info`. In debug mode the form
/// crate logs at `debug` unless `log_level` names it explicitly.
fn build_filter(settings: &Settings) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    let mut filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|e| {
        tracing::warn!(log_level = %settings.log_level, error = %e, "invalid log level, using info");
        EnvFilter::new("info")
    });
    if settings.debug && !settings.log_level.contains(FORMS_TARGET) {
        if let Ok(directive) = format!("{FORMS_TARGET}=debug").parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Creates a tracing span for one form instance.
///
/// # Examples
///
/// ```
/// use hireform_core::logging::form_span;
///
/// let span = form_span(7);
/// let _guard = span.enter();
/// tracing::debug!("applying event");
/// ```
pub fn form_span(form_id: u64) -> tracing::Span {
    tracing::debug_span!("form", id = form_id)
}
