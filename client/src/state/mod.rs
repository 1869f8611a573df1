//! Shared reactive state provided via Leptos context.
//!
//! ARCHITECTURE
//! ============
//! State lives in explicit `RwSignal` contexts provided at the application
//! root and read with `expect_context` — no ambient globals. `auth` holds the
//! session, `ui` holds transient chrome concerns.

pub mod auth;
pub mod ui;
