//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles HTTP calls against the `/api` surface, `types` defines the
//! shared wire schema. The backend service is authoritative for everything —
//! this layer only transports and deserializes.

pub mod api;
pub mod types;
