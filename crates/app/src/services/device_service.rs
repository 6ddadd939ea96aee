//! Device service — use-cases for managing devices.

use devicehub_domain::device::Device;
use devicehub_domain::error::{DeviceHubError, NotFoundError};
use devicehub_domain::id::DeviceId;

use crate::ports::DeviceRepository;

fn not_found(id: DeviceId) -> DeviceHubError {
    NotFoundError {
        entity: "Device",
        id: id.to_string(),
    }
    .into()
}

/// Application service for device CRUD operations.
pub struct DeviceService<R> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new device after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, device), fields(device_name = %device.name))]
    pub async fn create_device(&self, device: Device) -> Result<Device, DeviceHubError> {
        device.validate()?;
        let created = self.repo.create(device).await?;
        tracing::debug!(device_id = %created.id, "device created");
        Ok(created)
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::NotFound`] when no device with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, DeviceHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// List all devices.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_devices(&self) -> Result<Vec<Device>, DeviceHubError> {
        self.repo.get_all().await
    }

    /// Replace the device stored under `id` with `device`.
    ///
    /// The `id` argument wins over whatever id the payload carries.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::Validation`] if invariants fail,
    /// [`DeviceHubError::NotFound`] when no device with `id` exists, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, device))]
    pub async fn update_device(
        &self,
        id: DeviceId,
        device: Device,
    ) -> Result<Device, DeviceHubError> {
        let device = device.with_id(id);
        device.validate()?;
        self.repo
            .update(device)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete a device by id.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::NotFound`] when nothing was deleted, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(&self, id: DeviceId) -> Result<(), DeviceHubError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devicehub_domain::error::ValidationError;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryDeviceRepo {
        store: Mutex<BTreeMap<DeviceId, Device>>,
    }

    impl DeviceRepository for InMemoryDeviceRepo {
        fn create(
            &self,
            device: Device,
        ) -> impl Future<Output = Result<Device, DeviceHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let next = store.keys().next_back().map_or(1, |id| id.get() + 1);
            let device = device.with_id(DeviceId::new(next));
            store.insert(device.id, device.clone());
            async { Ok(device) }
        }

        fn get_by_id(
            &self,
            id: DeviceId,
        ) -> impl Future<Output = Result<Option<Device>, DeviceHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, DeviceHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Device> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            device: Device,
        ) -> impl Future<Output = Result<Option<Device>, DeviceHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = store.get_mut(&device.id).map(|slot| {
                *slot = device.clone();
                device
            });
            async { Ok(result) }
        }

        fn delete(&self, id: DeviceId) -> impl Future<Output = Result<bool, DeviceHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let removed = store.remove(&id).is_some();
            async move { Ok(removed) }
        }
    }

    fn make_service() -> DeviceService<InMemoryDeviceRepo> {
        DeviceService::new(InMemoryDeviceRepo::default())
    }

    fn valid_device() -> Device {
        Device::builder().name("Hue Bridge").build().unwrap()
    }

    #[tokio::test]
    async fn should_assign_id_when_creating_device() {
        let svc = make_service();

        let created = svc.create_device(valid_device()).await.unwrap();
        assert!(created.id.is_assigned());

        let fetched = svc.get_device(created.id).await.unwrap();
        assert_eq!(fetched.name, "Hue Bridge");
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_empty() {
        let svc = make_service();
        let mut device = valid_device();
        device.name = String::new();

        let result = svc.create_device(device).await;
        assert!(matches!(
            result,
            Err(DeviceHubError::Validation(ValidationError::EmptyName))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_device_missing() {
        let svc = make_service();
        let result = svc.get_device(DeviceId::new(42)).await;
        assert!(matches!(result, Err(DeviceHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_devices_in_id_order() {
        let svc = make_service();
        svc.create_device(valid_device()).await.unwrap();
        svc.create_device(Device::builder().name("Sensor Hub").build().unwrap())
            .await
            .unwrap();

        let all = svc.list_devices().await.unwrap();
        let names: Vec<&str> = all.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Hue Bridge", "Sensor Hub"]);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_store_is_empty() {
        let svc = make_service();
        assert!(svc.list_devices().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_update_device_using_path_id() {
        let svc = make_service();
        let created = svc.create_device(valid_device()).await.unwrap();

        let payload = Device::builder()
            .id(DeviceId::new(999))
            .name("Updated Bridge")
            .build()
            .unwrap();
        let saved = svc.update_device(created.id, payload).await.unwrap();
        assert_eq!(saved.id, created.id);

        let fetched = svc.get_device(created.id).await.unwrap();
        assert_eq!(fetched.name, "Updated Bridge");
        assert!(matches!(
            svc.get_device(DeviceId::new(999)).await,
            Err(DeviceHubError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_device() {
        let svc = make_service();
        let result = svc.update_device(DeviceId::new(5), valid_device()).await;
        assert!(matches!(result, Err(DeviceHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_device() {
        let svc = make_service();
        let created = svc.create_device(valid_device()).await.unwrap();

        svc.delete_device(created.id).await.unwrap();

        let result = svc.get_device(created.id).await;
        assert!(matches!(result, Err(DeviceHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_device() {
        let svc = make_service();
        let result = svc.delete_device(DeviceId::new(8)).await;
        assert!(matches!(result, Err(DeviceHubError::NotFound(_))));
    }
}
