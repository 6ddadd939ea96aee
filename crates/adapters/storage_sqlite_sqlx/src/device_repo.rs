//! `SQLite` implementation of [`DeviceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use devicehub_app::ports::DeviceRepository;
use devicehub_domain::device::Device;
use devicehub_domain::error::DeviceHubError;
use devicehub_domain::id::DeviceId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Device`].
struct Wrapper(Device);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Device> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Device {
            id: DeviceId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            manufacturer: row.try_get("manufacturer")?,
            model: row.try_get("model")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO devices (name, manufacturer, model) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM devices WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM devices ORDER BY id";
const UPDATE: &str = "UPDATE devices SET name = ?, manufacturer = ?, model = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM devices WHERE id = ?";

/// `SQLite`-backed device repository.
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    fn create(
        &self,
        device: Device,
    ) -> impl Future<Output = Result<Device, DeviceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&device.name)
                .bind(&device.manufacturer)
                .bind(&device.model)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(device.with_id(DeviceId::new(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, DeviceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, DeviceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        device: Device,
    ) -> impl Future<Output = Result<Option<Device>, DeviceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&device.name)
                .bind(&device.manufacturer)
                .bind(&device.model)
                .bind(device.id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok((result.rows_affected() > 0).then_some(device))
        }
    }

    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<bool, DeviceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteDeviceRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteDeviceRepository::new(db.pool().clone())
    }

    fn test_device() -> Device {
        Device::builder().name("Hue Bridge").build().unwrap()
    }

    #[tokio::test]
    async fn should_assign_id_and_retrieve_device_when_created() {
        let repo = setup().await;

        let created = repo.create(test_device()).await.unwrap();
        assert!(created.id.is_assigned());

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_ignore_payload_id_when_creating() {
        let repo = setup().await;
        let device = test_device().with_id(DeviceId::new(500));

        let created = repo.create(device).await.unwrap();
        assert_eq!(created.id.get(), 1);
    }

    #[tokio::test]
    async fn should_return_none_when_device_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(DeviceId::new(42)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_all_devices_ordered_by_id() {
        let repo = setup().await;
        let first = repo.create(test_device()).await.unwrap();
        let second = repo
            .create(Device::builder().name("Motion Sensor").build().unwrap())
            .await
            .unwrap();

        let all = repo.get_all().await.unwrap();
        let ids: Vec<DeviceId> = all.iter().map(|d| d.id).collect();
        assert_eq!(ids, [first.id, second.id]);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_table_is_empty() {
        let repo = setup().await;
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_update_device_when_exists() {
        let repo = setup().await;
        let mut device = repo.create(test_device()).await.unwrap();

        device.name = "Updated Bridge".to_string();
        device.manufacturer = Some("Philips".to_string());
        let updated = repo.update(device.clone()).await.unwrap();
        assert_eq!(updated, Some(device.clone()));

        let fetched = repo.get_by_id(device.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Updated Bridge");
        assert_eq!(fetched.manufacturer.as_deref(), Some("Philips"));
    }

    #[tokio::test]
    async fn should_return_none_when_updating_missing_device() {
        let repo = setup().await;
        let device = test_device().with_id(DeviceId::new(9));
        assert!(repo.update(device).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_delete_device_when_exists() {
        let repo = setup().await;
        let created = repo.create(test_device()).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());

        let result = repo.get_by_id(created.id).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_report_false_when_deleting_missing_device() {
        let repo = setup().await;
        assert!(!repo.delete(DeviceId::new(3)).await.unwrap());
    }

    #[tokio::test]
    async fn should_preserve_optional_fields_through_roundtrip() {
        let repo = setup().await;
        let device = Device::builder()
            .name("Sensor")
            .manufacturer("Aqara")
            .model("RTCGQ11LM")
            .build()
            .unwrap();
        let created = repo.create(device).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.manufacturer.as_deref(), Some("Aqara"));
        assert_eq!(fetched.model.as_deref(), Some("RTCGQ11LM"));
    }
}
