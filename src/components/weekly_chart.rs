//! Weekly Bar Chart Component
//!
//! Stacked bars of normal vs. flagged message counts for the last week.
//! Heights are plain pixel scaling over a fixed 400px chart area, matching
//! the 0-80 y-axis.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::state::global::DayCount;

/// Pixels per message on the y-axis (400px chart, 80 messages max)
const PX_PER_MESSAGE: u32 = 5;

/// Hover tooltip state
#[derive(Clone, Debug, Default, PartialEq)]
struct TooltipState {
    visible: bool,
    text: String,
    x: f64,
    y: f64,
}

/// Stacked weekly bar chart with hover tooltips
#[component]
pub fn WeeklyChart(weekly: Vec<DayCount>) -> impl IntoView {
    let (tooltip, set_tooltip) = create_signal(TooltipState::default());

    view! {
        <div class="bg-white p-6 rounded-lg shadow-md relative">
            // Tooltip
            {move || {
                let t = tooltip.get();
                t.visible.then(|| view! {
                    <div
                        class="fixed bg-gray-800 text-white py-1 px-2 rounded text-xs z-50 pointer-events-none"
                        style=format!("left: {}px; top: {}px; transform: translateX(-50%)", t.x, t.y)
                    >
                        {t.text}
                    </div>
                })
            }}

            <h3 class="text-lg font-medium text-gray-700 mb-4">"Messages Last Week"</h3>

            <div class="w-full p-4">
                <div class="flex" style="height: 400px">
                    // Y-axis labels
                    <div class="flex flex-col justify-between pr-2 text-right">
                        <span class="text-xs text-gray-600">"80"</span>
                        <span class="text-xs text-gray-600">"60"</span>
                        <span class="text-xs text-gray-600">"40"</span>
                        <span class="text-xs text-gray-600">"20"</span>
                        <span class="text-xs text-gray-600">"0"</span>
                    </div>

                    // Chart area with grid lines
                    <div class="flex-1 relative">
                        <div class="absolute inset-0">
                            <div class="absolute top-0 w-full border-t border-gray-200" />
                            <div class="absolute top-1/4 w-full border-t border-gray-200" />
                            <div class="absolute top-2/4 w-full border-t border-gray-200" />
                            <div class="absolute top-3/4 w-full border-t border-gray-200" />
                            <div class="absolute bottom-0 w-full border-t border-gray-400" />
                        </div>

                        // Bars
                        <div class="flex justify-between h-full items-end">
                            {weekly.into_iter().map(|day| {
                                view! { <DayColumn day=day set_tooltip=set_tooltip /> }
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>

            // Legend
            <div class="flex justify-center mt-4">
                <div class="flex items-center mr-6">
                    <div class="w-4 h-4 bg-blue-500 mr-2" />
                    <span class="text-sm">"Normal Messages"</span>
                </div>
                <div class="flex items-center">
                    <div class="w-4 h-4 bg-red-500 mr-2" />
                    <span class="text-sm">"Potential Injections"</span>
                </div>
            </div>
        </div>
    }
}

/// One stacked column of the weekly chart
#[component]
fn DayColumn(day: DayCount, set_tooltip: WriteSignal<TooltipState>) -> impl IntoView {
    let normal_text = format!("{} normal messages", day.normal);
    let injection_text = format!("{} potential injections", day.injection);

    let show = move |ev: web_sys::MouseEvent, text: String| {
        let Some(target) = ev.current_target() else {
            return;
        };
        let Ok(element) = target.dyn_into::<web_sys::Element>() else {
            return;
        };
        let rect = element.get_bounding_client_rect();
        set_tooltip.set(TooltipState {
            visible: true,
            text,
            x: rect.left() + rect.width() / 2.0,
            y: rect.top() - 25.0,
        });
    };
    let show_normal = show.clone();
    let hide = move |_| set_tooltip.update(|t| t.visible = false);
    let hide_normal = hide.clone();

    view! {
        <div class="flex flex-col items-center mx-2" style="width: 40px">
            <div
                class="w-full bg-blue-500 rounded-t"
                style=format!("height: {}px", bar_height_px(day.normal))
                on:mouseover=move |ev| show_normal(ev, normal_text.clone())
                on:mouseout=hide_normal
            />
            <div
                class="w-full bg-red-500 rounded-b mt-0.5"
                style=format!("height: {}px", bar_height_px(day.injection))
                on:mouseover=move |ev| show(ev, injection_text.clone())
                on:mouseout=hide
            />
            <p class="text-xs mt-2 font-medium">{day.day}</p>
        </div>
    }
}

/// Bar height in pixels for a message count
fn bar_height_px(count: u32) -> u32 {
    count * PX_PER_MESSAGE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::global::DashboardData;

    #[test]
    fn test_bar_height_scaling() {
        assert_eq!(bar_height_px(0), 0);
        assert_eq!(bar_height_px(48), 240);
        assert_eq!(bar_height_px(80), 400);
    }

    #[test]
    fn test_sample_week_fits_chart_area() {
        for day in DashboardData::sample().weekly {
            assert!(bar_height_px(day.normal) + bar_height_px(day.injection) <= 400);
        }
    }
}
