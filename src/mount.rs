//! Mount Entry Points
//!
//! Shims exported to JavaScript so each view can be mounted into an
//! arbitrary host element, for pages that embed a single view instead of
//! the full routed app. Mounted element ids are cached so a repeated init
//! call is a no-op rather than a double mount.

use std::cell::RefCell;
use std::collections::HashSet;

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::Toast;
use crate::pages::{Anomaly, Dashboard, Tracking};
use crate::state::global::provide_global_state;

thread_local! {
    static MOUNTED: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

/// Mount the dashboard view into the element with the given id
#[wasm_bindgen(js_name = initDashboard)]
pub fn init_dashboard(element_id: &str) -> bool {
    mount_view(element_id, || {
        provide_global_state();
        view! {
            <Dashboard />
            <Toast />
        }
    })
}

/// Mount the tracking view into the element with the given id
#[wasm_bindgen(js_name = initTracking)]
pub fn init_tracking(element_id: &str) -> bool {
    mount_view(element_id, || {
        provide_global_state();
        view! {
            <Tracking />
            <Toast />
        }
    })
}

/// Mount the anomaly view into the element with the given id
#[wasm_bindgen(js_name = initAnomaly)]
pub fn init_anomaly(element_id: &str) -> bool {
    mount_view(element_id, || {
        provide_global_state();
        view! {
            <Anomaly />
            <Toast />
        }
    })
}

/// Mount a view into the host element, once per element id
fn mount_view<F, N>(element_id: &str, f: F) -> bool
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(element) = document.get_element_by_id(element_id) else {
        return false;
    };
    let Ok(host) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };

    let first_mount = MOUNTED.with(|m| m.borrow_mut().insert(element_id.to_string()));
    if first_mount {
        mount_to(host, f);
    }
    true
}
