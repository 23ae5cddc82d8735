//! Pages
//!
//! Top-level route components.

pub mod dashboard;

pub use dashboard::Dashboard;
