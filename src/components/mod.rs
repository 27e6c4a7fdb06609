//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod donut;
pub mod loading;
pub mod message_card;
pub mod nav;
pub mod toast;
pub mod weekly_chart;

pub use donut::Donut;
pub use loading::Loading;
pub use message_card::MessageCard;
pub use nav::Nav;
pub use toast::Toast;
pub use weekly_chart::WeeklyChart;
