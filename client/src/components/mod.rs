//! Reusable UI components.

pub mod app_link;
pub mod error_fallback;
pub mod nav_drawer;
pub mod page_container;
pub mod session_gate;
pub mod streak_badge;
pub mod tour_overlay;
