//! # devicehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceRepository` — CRUD for devices
//!   - `Tracer` — attach attributes to the active trace span
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DeviceService` — create, list, get, update, delete
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `devicehub-domain` only (plus `tracing` for instrumentation).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
