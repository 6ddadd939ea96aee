//! [`Tracer`] backed by the `tracing` span of the current request.

use devicehub_app::ports::Tracer;

/// Records attributes on [`tracing::Span::current`].
///
/// The value only lands when the span declared the field up front, which
/// the request span built in [`crate::router`] does for `device.id`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentSpanTracer;

impl Tracer for CurrentSpanTracer {
    fn set_attribute(&self, key: &'static str, value: &str) {
        tracing::Span::current().record(key, value);
    }
}
