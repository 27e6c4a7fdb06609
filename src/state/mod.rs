//! State Management
//!
//! Global application state shared through the Leptos context.

pub mod global;

pub use global::{provide_global_state, DashboardData, DayCount, GlobalState, Message, Pagination};
