//! Donut Chart Component
//!
//! SVG donut showing the proportion of normal vs. flagged messages. The
//! segments are plain circles whose stroke-dasharray is the percentage on a
//! circumference normalized to 100 (radius 100/2π).

use leptos::*;

use crate::state::global::DashboardData;

/// Radius that gives the donut ring a circumference of exactly 100
const DONUT_RADIUS: &str = "15.91549430918954";

/// Donut chart of message-type proportions
#[component]
pub fn Donut(data: DashboardData) -> impl IntoView {
    let normal = data.normal_percent();
    let injection = data.injection_percent();

    let center_label = format!("{:.1}%", normal);
    let normal_legend = format!("Normal ({:.1}%)", normal);
    let injection_legend = format!("Injections ({:.1}%)", injection);

    view! {
        <div class="bg-white p-6 rounded-lg shadow-md">
            <h3 class="text-lg font-medium text-gray-700 mb-2">"Message Types"</h3>
            <div class="w-full h-64 flex justify-center items-center">
                <svg width="200" height="200" viewBox="0 0 42 42" class="donut">
                    <circle class="donut-hole" cx="21" cy="21" r=DONUT_RADIUS fill="#fff" />
                    <circle
                        class="donut-ring"
                        cx="21" cy="21" r=DONUT_RADIUS
                        fill="transparent"
                        stroke="#d2d3d4"
                        stroke-width="3"
                    />

                    // Normal segment starts at the top
                    <circle
                        class="donut-segment"
                        cx="21" cy="21" r=DONUT_RADIUS
                        fill="transparent"
                        stroke="#0074D9"
                        stroke-width="3"
                        stroke-dasharray=segment_dasharray(normal)
                        stroke-dashoffset="0"
                    />

                    // Injection segment continues where the normal one ends
                    <circle
                        class="donut-segment"
                        cx="21" cy="21" r=DONUT_RADIUS
                        fill="transparent"
                        stroke="#FF4136"
                        stroke-width="3"
                        stroke-dasharray=segment_dasharray(injection)
                        stroke-dashoffset=segment_dashoffset(normal)
                    />

                    <g class="chart-text">
                        <text x="50%" y="50%" class="chart-number" text-anchor="middle" alignment-baseline="middle">
                            {center_label}
                        </text>
                        <text x="50%" y="50%" class="chart-label" text-anchor="middle" alignment-baseline="middle" dy="1.2em">
                            "normal"
                        </text>
                    </g>
                </svg>
            </div>

            // Legend
            <div class="flex justify-center mt-4">
                <div class="flex items-center mr-6">
                    <div class="w-4 h-4 rounded-full bg-blue-500 mr-2" />
                    <span class="text-sm">{normal_legend}</span>
                </div>
                <div class="flex items-center">
                    <div class="w-4 h-4 rounded-full bg-red-500 mr-2" />
                    <span class="text-sm">{injection_legend}</span>
                </div>
            </div>
        </div>
    }
}

/// Dasharray drawing `percent` of the ring and leaving the rest blank
fn segment_dasharray(percent: f64) -> String {
    format!("{:.1} {:.1}", percent, 100.0 - percent)
}

/// Offset placing a segment immediately after the first `after_percent` of the ring
fn segment_dashoffset(after_percent: f64) -> String {
    format!("-{:.1}", after_percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dasharray_covers_full_ring() {
        assert_eq!(segment_dasharray(95.3), "95.3 4.7");
        assert_eq!(segment_dasharray(0.0), "0.0 100.0");
        assert_eq!(segment_dasharray(100.0), "100.0 0.0");
    }

    #[test]
    fn test_dashoffset_follows_previous_segment() {
        assert_eq!(segment_dashoffset(95.3), "-95.3");
        assert_eq!(segment_dashoffset(0.0), "-0.0");
    }

    #[test]
    fn test_segments_from_sample_data() {
        let data = DashboardData::sample();
        let normal = data.normal_percent();
        let injection = data.injection_percent();
        assert_eq!(segment_dasharray(normal), "95.3 4.7");
        assert_eq!(segment_dasharray(injection), "4.7 95.3");
        assert_eq!(segment_dashoffset(normal), "-95.3");
    }
}
