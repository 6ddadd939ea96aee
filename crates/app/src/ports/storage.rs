//! Storage port — repository traits for persistence.

use std::future::Future;

use devicehub_domain::device::Device;
use devicehub_domain::error::DeviceHubError;
use devicehub_domain::id::DeviceId;

/// Persistence operations for [`Device`] records.
///
/// Implementations must be safe to share between concurrent requests.
pub trait DeviceRepository {
    /// Insert a new device and return it with its store-assigned id.
    ///
    /// The `id` carried by `device` is ignored.
    fn create(&self, device: Device) -> impl Future<Output = Result<Device, DeviceHubError>> + Send;

    /// Fetch a single device, `None` when absent.
    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, DeviceHubError>> + Send;

    /// Fetch every device ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, DeviceHubError>> + Send;

    /// Overwrite the device identified by `device.id`.
    ///
    /// Resolves to `None` when no such row exists.
    fn update(
        &self,
        device: Device,
    ) -> impl Future<Output = Result<Option<Device>, DeviceHubError>> + Send;

    /// Remove a device. Resolves to `false` when nothing was deleted.
    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<bool, DeviceHubError>> + Send;
}
