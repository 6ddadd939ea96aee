//! JSON REST handlers for devices.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use devicehub_app::ports::DeviceRepository;
use devicehub_domain::device::Device;
use devicehub_domain::error::{DeviceHubError, InvalidIdError, ValidationError};
use devicehub_domain::id::DeviceId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing a device.
///
/// Unknown fields, including any client-supplied `id`, are ignored.
#[derive(Deserialize)]
pub struct DeviceRequest {
    pub name: String,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
}

impl DeviceRequest {
    fn into_device(self) -> Result<Device, DeviceHubError> {
        let mut builder = Device::builder().name(self.name);
        if let Some(manufacturer) = self.manufacturer {
            builder = builder.manufacturer(manufacturer);
        }
        if let Some(model) = self.model {
            builder = builder.model(model);
        }
        builder.build()
    }
}

/// Every way a body can fail to become a [`Device`] is a validation error.
fn parse_body(body: Result<Json<DeviceRequest>, JsonRejection>) -> Result<Device, ApiError> {
    let Json(req) = body
        .map_err(|rejection| DeviceHubError::from(ValidationError::Malformed(rejection.body_text())))?;
    Ok(req.into_device()?)
}

/// A segment axum cannot decode is reported the same way as a non-numeric one.
fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<DeviceId, ApiError> {
    let Path(raw) = path
        .map_err(|rejection| DeviceHubError::from(InvalidIdError::Undecodable(rejection.body_text())))?;
    Ok(DeviceId::from_str(&raw).map_err(DeviceHubError::from)?)
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Device>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Device>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update and delete endpoints.
pub enum NoContentResponse {
    NoContent,
}

impl IntoResponse for NoContentResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/devices`
pub async fn list<DR>(State(state): State<AppState<DR>>) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let devices = state.device_service.list_devices().await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET /api/devices/:id`
///
/// On success the device id is attached to the request span as `device.id`.
pub async fn get<DR>(
    State(state): State<AppState<DR>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let device_id = parse_id(path)?;
    let device = state.device_service.get_device(device_id).await?;
    state
        .tracer
        .set_attribute("device.id", &device.id.to_string());
    Ok(GetResponse::Ok(Json(device)))
}

/// `POST /api/devices`
pub async fn create<DR>(
    State(state): State<AppState<DR>>,
    body: Result<Json<DeviceRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let device = parse_body(body)?;
    let created = state.device_service.create_device(device).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/devices/:id`
///
/// The body is checked before the id, so a request with both wrong is a 422.
pub async fn update<DR>(
    State(state): State<AppState<DR>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<DeviceRequest>, JsonRejection>,
) -> Result<NoContentResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let device = parse_body(body)?;
    let device_id = parse_id(path)?;
    state.device_service.update_device(device_id, device).await?;
    Ok(NoContentResponse::NoContent)
}

/// `DELETE /api/devices/:id`
///
/// Any service failure is a 500, a missing device included.
pub async fn delete<DR>(
    State(state): State<AppState<DR>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<NoContentResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let device_id = parse_id(path)?;
    state
        .device_service
        .delete_device(device_id)
        .await
        .map_err(ApiError::internal)?;
    Ok(NoContentResponse::NoContent)
}
