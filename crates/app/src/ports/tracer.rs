//! Tracer port — enrich the active trace span with request attributes.

/// Attaches string attributes to whatever span is active for the request.
///
/// Implementations must never fail the request they annotate.
pub trait Tracer: Send + Sync {
    fn set_attribute(&self, key: &'static str, value: &str);
}

/// Tracer used when no trace collector is configured. Drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    fn set_attribute(&self, _key: &'static str, _value: &str) {}
}
