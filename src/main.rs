//! InjectWatch Dashboard
//!
//! Monitoring frontend for a chat-message pipeline that flags prompt
//! injection attempts, built with Leptos (WASM).
//!
//! # Features
//!
//! - Aggregate dashboard with donut and weekly bar charts
//! - Paginated message tracking with inline edit and delete
//! - Anomaly feed of flagged messages
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the InjectWatch REST API over HTTP with bearer
//! token auth. Individual views can also be mounted into host elements via
//! the exported `init*` functions in [`mount`].

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod mount;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
