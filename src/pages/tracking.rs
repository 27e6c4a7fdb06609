//! Tracking Page
//!
//! Paginated message list with inline delete and injection-flag editing.

use leptos::*;

use crate::api;
use crate::components::{Loading, MessageCard};
use crate::state::global::{apply_injection_flag, GlobalState};

/// Tracking page component
#[component]
pub fn Tracking() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let pagination = state.pagination;

    // Refetch whenever the page or page size changes. `has_more` is written
    // back after every fetch, so the effect keys on a memo that ignores it.
    let page_key = create_memo(move |_| {
        let p = pagination.get();
        (p.page, p.page_size)
    });

    let state_for_effect = state.clone();
    create_effect(move |_| {
        page_key.track();
        load_messages(state_for_effect.clone());
    });

    let state_for_refresh = state.clone();
    let refresh = move |_| load_messages(state_for_refresh.clone());

    // Delete: confirm happened in the card; issue the request and refetch the
    // current page so the list reflects the removal.
    let state_for_delete = state.clone();
    let on_delete = Callback::new(move |id: String| {
        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::delete_message(&id).await {
                Ok(()) => {
                    state.show_success("Message deleted");
                    load_messages(state);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error deleting message: {}", e).into());
                    state.show_error("Error deleting message. Please try again.");
                }
            }
        });
    });

    // Flag toggle: PATCH, then update the one message locally. On failure
    // the DOM checkbox has already flipped, so refetch the page to snap it
    // back to the server's value.
    let state_for_toggle = state.clone();
    let on_toggle = Callback::new(move |(id, flagged): (String, bool)| {
        let state = state_for_toggle.clone();
        spawn_local(async move {
            match api::set_injection_flag(&id, flagged).await {
                Ok(()) => {
                    state.messages.update(|m| apply_injection_flag(m, &id, flagged));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error updating message: {}", e).into());
                    state.show_error("Error updating message. Please try again.");
                    load_messages(state);
                }
            }
        });
    });

    let page_size_change = move |ev: web_sys::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
            pagination.update(|p| p.set_page_size(size));
        }
    };

    let loading = state.loading;
    let empty = state.empty;
    let messages = state.messages;

    view! {
        <div>
            <h2 class="text-2xl font-semibold mb-4">"Message Tracking"</h2>

            <div class="bg-white p-6 rounded-lg shadow-md mb-4">
                // Header row: title, page size, refresh
                <div class="flex justify-between items-center mb-6">
                    <h3 class="text-lg font-medium">"Your Chat Messages"</h3>
                    <div class="flex space-x-2">
                        <select
                            class="border rounded px-2 py-1 text-sm"
                            on:change=page_size_change
                            prop:value=move || pagination.get().page_size.to_string()
                        >
                            <option value="5">"5 per page"</option>
                            <option value="10">"10 per page"</option>
                            <option value="25">"25 per page"</option>
                            <option value="50">"50 per page"</option>
                        </select>
                        <button
                            class="bg-blue-100 text-blue-700 px-3 py-1 rounded hover:bg-blue-200"
                            on:click=refresh
                        >
                            "⟳"
                        </button>
                    </div>
                </div>

                // Loading indicator
                {move || loading.get().then(|| view! { <Loading /> })}

                // Empty state
                {move || {
                    (!loading.get() && empty.get()).then(|| view! {
                        <div class="py-20 text-center">
                            <p class="text-gray-500">"No messages found"</p>
                            <p class="text-gray-400 text-sm mt-2">
                                "Messages sent via the API will appear here"
                            </p>
                        </div>
                    })
                }}

                // Message list
                {move || {
                    (!loading.get() && !empty.get()).then(|| view! {
                        <div class="space-y-4">
                            {messages.get().into_iter().map(|message| {
                                view! {
                                    <MessageCard
                                        message=message
                                        on_delete=on_delete.clone()
                                        on_toggle=on_toggle.clone()
                                    />
                                }
                            }).collect_view()}
                        </div>
                    })
                }}

                // Pagination bar
                {move || {
                    (!loading.get() && !empty.get()).then(|| {
                        let p = pagination.get();
                        view! {
                            <div class="mt-6 flex justify-between items-center">
                                <button
                                    class="bg-gray-100 text-gray-700 px-4 py-2 rounded disabled:opacity-50"
                                    disabled={p.page <= 1}
                                    on:click=move |_| pagination.update(|p| p.prev())
                                >
                                    "← Previous"
                                </button>
                                <div class="text-sm text-gray-500">
                                    "Page " {p.page}
                                </div>
                                <button
                                    class="bg-gray-100 text-gray-700 px-4 py-2 rounded disabled:opacity-50"
                                    disabled={!p.has_more}
                                    on:click=move |_| pagination.update(|p| p.next())
                                >
                                    "Next →"
                                </button>
                            </div>
                        }
                    })
                }}
            </div>

            // API hint
            <div class="bg-blue-50 border border-blue-200 rounded-lg p-4 text-blue-800">
                <div class="flex">
                    <div class="flex-shrink-0 mr-3 text-blue-500 text-xl">"ℹ"</div>
                    <div>
                        <h4 class="font-medium mb-1">"Using the Messages API"</h4>
                        <p class="text-sm">
                            "Messages are created via the API using your API token. "
                            "Generate a token to see them appear here."
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Fetch the current page of messages into global state
fn load_messages(state: GlobalState) {
    spawn_local(async move {
        state.loading.set(true);
        state.empty.set(false);

        let p = state.pagination.get_untracked();
        match api::fetch_messages(p.skip(), p.page_size).await {
            Ok(messages) => {
                state.pagination.update(|p| p.record_page(messages.len()));
                state.empty.set(messages.is_empty());
                state.messages.set(messages);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Error fetching messages: {}", e).into());
                state.messages.set(Vec::new());
                state.empty.set(true);
            }
        }

        state.loading.set(false);
    });
}
