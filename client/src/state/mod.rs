//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `progress`, `tour`, `ui`) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod progress;
pub mod tour;
pub mod ui;
