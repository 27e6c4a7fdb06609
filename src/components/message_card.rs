//! Message Card Component
//!
//! Collapsible card for a single chat message: preview header, expandable
//! details with the full content and response, an injection-flag checkbox
//! and a delete button.

use leptos::*;

use crate::state::global::Message;

/// Preview length for the collapsed header
const PREVIEW_LEN: usize = 40;

/// Collapsible message card
#[component]
pub fn MessageCard(
    message: Message,
    /// Invoked with the message id after the user confirms deletion
    #[prop(into)]
    on_delete: Callback<String>,
    /// Invoked with (id, new flag value) when the checkbox changes
    #[prop(into)]
    on_toggle: Callback<(String, bool)>,
) -> impl IntoView {
    let (expanded, set_expanded) = create_signal(false);

    let id_for_delete = message.id.clone();
    let id_for_toggle = message.id.clone();
    let flagged = message.is_prompt_injection;

    let header_class = move || {
        let bg = if flagged { "bg-red-50" } else { "bg-gray-50" };
        format!(
            "{} px-4 py-3 flex justify-between items-center cursor-pointer hover:bg-gray-100",
            bg
        )
    };

    let icon = if flagged {
        view! { <span class="text-red-500">"⚠️"</span> }
    } else {
        view! { <span class="text-blue-500">"💬"</span> }
    };

    let delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if confirm("Are you sure you want to delete this message?") {
            on_delete.call(id_for_delete.clone());
        }
    };

    let toggle = move |ev: web_sys::Event| {
        on_toggle.call((id_for_toggle.clone(), event_target_checked(&ev)));
    };

    view! {
        <div class="border rounded-lg overflow-hidden">
            // Header: preview, date, delete, chevron
            <div class=header_class on:click=move |_| set_expanded.update(|e| *e = !*e)>
                <div class="flex items-center space-x-2">
                    {icon}
                    <p class="font-medium">{truncate(&message.content, PREVIEW_LEN)}</p>
                </div>
                <div class="flex items-center space-x-4">
                    <span class="text-sm text-gray-500">{format_date(&message.created_at)}</span>
                    <button class="text-red-500 hover:text-red-700" on:click=delete>
                        "🗑"
                    </button>
                    <span class="text-gray-400">
                        {move || if expanded.get() { "▲" } else { "▼" }}
                    </span>
                </div>
            </div>

            // Details
            {move || {
                expanded.get().then(|| view! {
                    <div class="p-4 border-t">
                        <div class="mb-4">
                            <h4 class="text-sm font-medium text-gray-500 mb-1">"Message"</h4>
                            <div class="bg-gray-50 p-3 rounded">{message.content.clone()}</div>
                        </div>

                        {message.response.clone().map(|response| view! {
                            <div>
                                <h4 class="text-sm font-medium text-gray-500 mb-1">"Response"</h4>
                                <div class="bg-gray-50 p-3 rounded">{response}</div>
                            </div>
                        })}

                        <div class="mt-4 flex justify-between items-center">
                            <label class="inline-flex items-center">
                                <input
                                    type="checkbox"
                                    class="form-checkbox h-5 w-5 text-red-600"
                                    prop:checked=flagged
                                    on:change=toggle.clone()
                                />
                                <span class="ml-2 text-red-700 font-medium">"Prompt Injection"</span>
                            </label>
                            <div class="text-xs text-gray-500">
                                "Message ID: " {message.id.clone()}
                            </div>
                        </div>
                    </div>
                })
            }}
        </div>
    }
}

/// Browser confirm dialog, false when no window is available
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Truncate to `max` characters, appending an ellipsis when shortened
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{}…", head)
    }
}

/// Render an RFC 3339 timestamp as a local date-time string
///
/// Unparseable input falls through unchanged rather than hiding the row.
fn format_date(created_at: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(created_at)
        .map(|dt| {
            dt.with_timezone(&chrono::Local)
                .format("%b %d, %Y %H:%M")
                .to_string()
        })
        .unwrap_or_else(|_| created_at.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("hello", 40), "hello");
        assert_eq!(truncate("", 40), "");
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "a".repeat(50);
        let out = truncate(&long, 40);
        assert_eq!(out.chars().count(), 41);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn test_truncate_is_char_boundary_safe() {
        let text = "héllo wörld ".repeat(10);
        let out = truncate(&text, 40);
        assert!(out.ends_with('…'));
        assert_eq!(out.chars().count(), 41);
    }

    #[test]
    fn test_format_date_parses_rfc3339() {
        let out = format_date("2026-08-01T12:34:56Z");
        assert!(out.contains("2026"));
        assert!(out.contains("Aug"));
    }

    #[test]
    fn test_format_date_passes_through_garbage() {
        assert_eq!(format_date("not-a-date"), "not-a-date");
    }
}
