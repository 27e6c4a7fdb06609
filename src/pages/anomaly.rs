//! Anomaly Page
//!
//! Feed of messages currently flagged as prompt injection.

use leptos::*;

use crate::api;
use crate::components::Loading;
use crate::state::global::{retain_flagged, Message};

/// How many recent messages to scan for anomalies
const SCAN_LIMIT: usize = 50;

/// Anomaly page component
#[component]
pub fn Anomaly() -> impl IntoView {
    let (anomalies, set_anomalies) = create_signal(Vec::<Message>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_messages(0, SCAN_LIMIT).await {
                Ok(messages) => {
                    set_anomalies.set(retain_flagged(messages));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching anomalies: {}", e).into());
                    set_anomalies.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div>
            <h2 class="text-2xl font-semibold mb-4">"Anomaly Detection"</h2>

            <div class="bg-white p-6 rounded-lg shadow-md">
                <h3 class="text-lg font-medium mb-6">"Flagged Messages"</h3>

                {move || loading.get().then(|| view! { <Loading /> })}

                {move || {
                    (!loading.get() && anomalies.get().is_empty()).then(|| view! {
                        <div class="py-20 text-center">
                            <p class="text-gray-500">"No anomalies detected"</p>
                            <p class="text-gray-400 text-sm mt-2">
                                "Messages flagged as prompt injection will appear here"
                            </p>
                        </div>
                    })
                }}

                {move || {
                    let flagged = anomalies.get();
                    (!loading.get() && !flagged.is_empty()).then(|| view! {
                        <div class="space-y-4">
                            {flagged.into_iter().map(|message| {
                                view! { <AnomalyCard message=message /> }
                            }).collect_view()}
                        </div>
                    })
                }}
            </div>
        </div>
    }
}

/// Alert card for one flagged message
#[component]
fn AnomalyCard(message: Message) -> impl IntoView {
    view! {
        <div class="border border-red-200 bg-red-50 rounded-lg p-4">
            <div class="flex items-center justify-between mb-2">
                <div class="flex items-center space-x-2">
                    <span class="text-red-500">"⚠️"</span>
                    <span class="text-red-700 font-medium">"Potential prompt injection"</span>
                </div>
                <span class="text-sm text-gray-500">{message.created_at.clone()}</span>
            </div>

            <div class="bg-white p-3 rounded text-sm">{message.content.clone()}</div>

            {message.response.clone().map(|response| view! {
                <div class="mt-2">
                    <h4 class="text-xs font-medium text-gray-500 mb-1">"Response"</h4>
                    <div class="bg-white p-3 rounded text-sm">{response}</div>
                </div>
            })}

            <div class="text-xs text-gray-500 mt-2">
                "Message ID: " {message.id.clone()}
            </div>
        </div>
    }
}
