//! Pages
//!
//! Top-level page components for each route.

pub mod anomaly;
pub mod dashboard;
pub mod tracking;

pub use anomaly::Anomaly;
pub use dashboard::Dashboard;
pub use tracking::Tracking;
