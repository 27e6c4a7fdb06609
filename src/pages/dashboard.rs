//! Dashboard Page
//!
//! Aggregate view: total-message counter, donut chart of message types,
//! weekly bar chart and a server-status line fed by a periodic health probe.

use leptos::*;

use crate::api;
use crate::api::client::HealthResponse;
use crate::components::{Donut, WeeklyChart};
use crate::state::global::{DashboardData, GlobalState};

/// Health probe interval in milliseconds
const HEALTH_POLL_MS: u32 = 30_000;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Counters are a placeholder literal until the backend exposes an
    // aggregate endpoint.
    let (data, _set_data) = create_signal(DashboardData::sample());

    // Probe server health on mount, then on an interval. The handle is kept
    // and dropped on unmount, which cancels the interval.
    let status_signal = state.server_status;
    create_effect(move |_| {
        probe_health(status_signal);
    });
    let poll = gloo_timers::callback::Interval::new(HEALTH_POLL_MS, move || {
        probe_health(status_signal);
    });
    on_cleanup(move || drop(poll));

    view! {
        <div>
            <h2 class="text-2xl font-semibold mb-4">"Dashboard"</h2>

            // Top row: total counter and donut chart
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-6">
                <TotalMessages total=move || data.get().total_messages />
                {move || view! { <Donut data=data.get() /> }}
            </div>

            // Bottom row: weekly chart and server status
            <div>
                {move || view! { <WeeklyChart weekly=data.get().weekly /> }}
                <p class="text-gray-500 mt-6 text-sm">
                    {move || status_signal.get()}
                </p>
            </div>
        </div>
    }
}

/// Total-message counter card
#[component]
fn TotalMessages(total: impl Fn() -> u64 + 'static) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-lg shadow-md">
            <h3 class="text-lg font-medium text-gray-700 mb-4">"Total Messages"</h3>
            <div class="flex items-center justify-center flex-col">
                <div class="text-8xl font-bold text-blue-600 leading-none mb-4">
                    {move || thousands(total())}
                </div>
                <div class="flex items-center text-green-500 font-medium">
                    <span class="mr-1">"↗"</span>
                    <span>"12.5% increase from last month"</span>
                </div>
            </div>
        </div>
    }
}

/// Fire one health probe and update the status line from the result
fn probe_health(status: RwSignal<String>) {
    spawn_local(async move {
        let result = api::check_health().await;
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Health check failed: {}", e).into());
        }
        status.set(status_line(result));
    });
}

/// Render a health probe result as the dashboard status line
fn status_line(result: Result<HealthResponse, String>) -> String {
    match result {
        Ok(health) if health.status == "ok" || health.status == "healthy" => {
            "Server Status: Online".to_string()
        }
        Ok(health) => format!("Server Status: {}", health.status),
        Err(_) => "Server Status: Offline".to_string(),
    }
}

/// Format an integer with thousands separators
fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_separator() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1247), "1,247");
        assert_eq!(thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn test_status_line_online_for_healthy_backend() {
        let result = Ok(HealthResponse {
            status: "healthy".to_string(),
        });
        assert_eq!(status_line(result), "Server Status: Online");
    }

    #[test]
    fn test_status_line_passes_through_odd_status() {
        let result = Ok(HealthResponse {
            status: "degraded".to_string(),
        });
        assert_eq!(status_line(result), "Server Status: degraded");
    }

    #[test]
    fn test_status_line_offline_on_error() {
        assert_eq!(
            status_line(Err("Network error".to_string())),
            "Server Status: Offline"
        );
    }
}
