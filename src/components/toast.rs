//! Toast Notification Component
//!
//! Transient success and error banners, styled like the rest of the light
//! dashboard chrome: white cards with a colored accent edge, stacked under
//! the nav bar.

use leptos::*;

use crate::state::global::GlobalState;

/// Outcome category of a toast banner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ToastVariant {
    Success,
    Error,
}

impl ToastVariant {
    fn icon(self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Error => "⚠",
        }
    }

    /// Accent classes for the card border and icon
    fn accent(self) -> (&'static str, &'static str) {
        match self {
            ToastVariant::Success => ("border-green-500", "text-green-600"),
            ToastVariant::Error => ("border-red-500", "text-red-600"),
        }
    }
}

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed top-20 right-4 z-50 space-y-2">
            {move || {
                state.success.get().map(|msg| view! {
                    <ToastBanner message=msg variant=ToastVariant::Success />
                })
            }}

            {move || {
                state.error.get().map(|msg| view! {
                    <ToastBanner message=msg variant=ToastVariant::Error />
                })
            }}
        </div>
    }
}

/// A single toast banner
#[component]
fn ToastBanner(
    #[prop(into)]
    message: String,
    variant: ToastVariant,
) -> impl IntoView {
    let (border, icon_color) = variant.accent();

    view! {
        <div class=format!(
            "flex items-center space-x-3 bg-white border-l-4 {} px-4 py-3 rounded shadow-md",
            border
        )>
            <span class=format!("text-lg {}", icon_color)>{variant.icon()}</span>
            <span class="text-sm font-medium text-gray-800">{message}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_have_distinct_accents() {
        assert_ne!(
            ToastVariant::Success.accent(),
            ToastVariant::Error.accent()
        );
        assert_ne!(ToastVariant::Success.icon(), ToastVariant::Error.icon());
    }

    #[test]
    fn test_error_accent_is_red() {
        let (border, icon) = ToastVariant::Error.accent();
        assert!(border.contains("red"));
        assert!(icon.contains("red"));
    }
}
