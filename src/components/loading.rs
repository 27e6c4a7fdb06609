//! Loading Component
//!
//! Loading spinner shown while a fetch is in flight.

use leptos::*;

/// Centered loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="py-20 flex justify-center">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600" />
        </div>
    }
}
