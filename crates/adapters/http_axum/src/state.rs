//! Shared application state for axum handlers.

use std::sync::Arc;

use devicehub_app::ports::{DeviceRepository, Tracer};
use devicehub_app::services::device_service::DeviceService;

/// Application state shared across all axum handlers.
///
/// Generic over the device repository to avoid dynamic dispatch on the hot
/// path; the tracer is chosen at runtime so it sits behind a trait object.
/// `Clone` is implemented manually so the repository type itself does not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<DR> {
    /// Device CRUD service.
    pub device_service: Arc<DeviceService<DR>>,
    /// Span annotator used on successful fetches.
    pub tracer: Arc<dyn Tracer>,
}

impl<DR> Clone for AppState<DR> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
            tracer: Arc::clone(&self.tracer),
        }
    }
}

impl<DR> AppState<DR>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service and a tracer.
    pub fn new(device_service: DeviceService<DR>, tracer: Arc<dyn Tracer>) -> Self {
        Self {
            device_service: Arc::new(device_service),
            tracer,
        }
    }
}
