//! # devicehub-domain
//!
//! Pure domain model for the devicehub service.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`DeviceId`](id::DeviceId) and the error taxonomy
//! - Define **Devices** and their invariants
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod device;
