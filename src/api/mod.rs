//! API Layer
//!
//! REST client for the InjectWatch backend.

pub mod client;

pub use client::{check_health, delete_message, fetch_messages, set_injection_flag};
