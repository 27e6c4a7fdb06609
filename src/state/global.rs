//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Current page of messages from the API
    pub messages: RwSignal<Vec<Message>>,
    /// Pagination cursor for the tracking view
    pub pagination: RwSignal<Pagination>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// True when the last fetch produced nothing to show
    pub empty: RwSignal<bool>,
    /// Server status line driven by the health probe
    pub server_status: RwSignal<String>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// A chat message as returned by the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub response: Option<String>,
    pub is_prompt_injection: bool,
    pub created_at: String,
}

/// Client-side pagination cursor
///
/// The API reports no total count, so `has_more` is inferred from page
/// fullness: a full page means at least one more page is assumed to exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
    pub has_more: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            has_more: false,
        }
    }
}

impl Pagination {
    /// Offset of the first message on the current page
    pub fn skip(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    /// Update `has_more` from the length of the page just fetched
    pub fn record_page(&mut self, fetched: usize) {
        self.has_more = fetched == self.page_size;
    }

    /// Advance to the next page
    pub fn next(&mut self) {
        self.page += 1;
    }

    /// Go back one page, clamped at page 1
    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Change the page size, resetting to the first page
    pub fn set_page_size(&mut self, size: usize) {
        self.page = 1;
        self.page_size = size;
        self.has_more = false;
    }
}

/// Aggregate counters behind the dashboard view
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub total_messages: u64,
    pub normal_messages: u64,
    pub injection_messages: u64,
    pub weekly: Vec<DayCount>,
}

/// Per-day message counts for the weekly bar chart
#[derive(Clone, Debug, PartialEq)]
pub struct DayCount {
    pub day: &'static str,
    pub normal: u32,
    pub injection: u32,
}

impl DashboardData {
    /// Placeholder counters shown until the backend grows an aggregate endpoint
    pub fn sample() -> Self {
        Self {
            total_messages: 1247,
            normal_messages: 1189,
            injection_messages: 58,
            weekly: vec![
                DayCount { day: "Mon", normal: 48, injection: 4 },
                DayCount { day: "Tue", normal: 36, injection: 6 },
                DayCount { day: "Wed", normal: 60, injection: 8 },
                DayCount { day: "Thu", normal: 40, injection: 2 },
                DayCount { day: "Fri", normal: 52, injection: 5 },
                DayCount { day: "Sat", normal: 24, injection: 1 },
                DayCount { day: "Sun", normal: 20, injection: 1 },
            ],
        }
    }

    /// Share of normal messages, in percent. Zero when there are no messages.
    pub fn normal_percent(&self) -> f64 {
        percent(self.normal_messages, self.total_messages)
    }

    /// Share of flagged messages, in percent. Zero when there are no messages.
    pub fn injection_percent(&self) -> f64 {
        percent(self.injection_messages, self.total_messages)
    }
}

fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Flip the injection flag on the matching message, in place.
///
/// Used after a successful PATCH so the list reflects the change without a
/// refetch.
pub fn apply_injection_flag(messages: &mut [Message], id: &str, flagged: bool) {
    if let Some(message) = messages.iter_mut().find(|m| m.id == id) {
        message.is_prompt_injection = flagged;
    }
}

/// Keep only messages currently flagged as prompt injection
pub fn retain_flagged(mut messages: Vec<Message>) -> Vec<Message> {
    messages.retain(|m| m.is_prompt_injection);
    messages
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        messages: create_rw_signal(Vec::new()),
        pagination: create_rw_signal(Pagination::default()),
        loading: create_rw_signal(false),
        empty: create_rw_signal(false),
        server_status: create_rw_signal("Server Status: Unknown".to_string()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: &str, flagged: bool) -> Message {
        Message {
            id: id.to_string(),
            content: format!("message {}", id),
            response: None,
            is_prompt_injection: flagged,
            created_at: "2026-08-01T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_percent_zero_total() {
        let data = DashboardData {
            total_messages: 0,
            normal_messages: 0,
            injection_messages: 0,
            weekly: Vec::new(),
        };
        assert_eq!(data.normal_percent(), 0.0);
        assert_eq!(data.injection_percent(), 0.0);
    }

    #[test]
    fn test_percent_split() {
        let data = DashboardData::sample();
        assert!((data.normal_percent() - 95.3).abs() < 0.05);
        assert!((data.injection_percent() - 4.7).abs() < 0.05);
        assert!((data.normal_percent() + data.injection_percent() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_pagination_skip() {
        let mut p = Pagination::default();
        assert_eq!(p.skip(), 0);
        p.next();
        p.next();
        assert_eq!(p.page, 3);
        assert_eq!(p.skip(), 20);
    }

    #[test]
    fn test_pagination_full_page_implies_more() {
        let mut p = Pagination::default();
        p.record_page(10);
        assert!(p.has_more);
        p.record_page(3);
        assert!(!p.has_more);
        p.record_page(0);
        assert!(!p.has_more);
    }

    #[test]
    fn test_pagination_prev_clamps_at_first_page() {
        let mut p = Pagination::default();
        p.prev();
        assert_eq!(p.page, 1);
        p.next();
        p.prev();
        assert_eq!(p.page, 1);
    }

    #[test]
    fn test_pagination_page_size_change_resets() {
        let mut p = Pagination::default();
        p.next();
        p.record_page(10);
        p.set_page_size(25);
        assert_eq!(p.page, 1);
        assert_eq!(p.page_size, 25);
        assert!(!p.has_more);
    }

    #[test]
    fn test_apply_injection_flag_targets_one_message() {
        let mut messages = vec![message("a", false), message("b", false)];
        apply_injection_flag(&mut messages, "b", true);
        assert!(!messages[0].is_prompt_injection);
        assert!(messages[1].is_prompt_injection);

        // Unknown id leaves the list untouched
        apply_injection_flag(&mut messages, "zzz", true);
        assert!(!messages[0].is_prompt_injection);
    }

    #[test]
    fn test_refetch_restores_server_flags() {
        // A flag flip the backend rejects must not outlive the page: the
        // failure handler refetches, and the server's copy wins over any
        // locally flipped value.
        let mut page = vec![message("a", false), message("b", true)];
        apply_injection_flag(&mut page, "a", true);
        assert!(page[0].is_prompt_injection);

        page = vec![message("a", false), message("b", true)];
        assert!(!page[0].is_prompt_injection);
        assert!(page[1].is_prompt_injection);
    }

    #[test]
    fn test_retain_flagged() {
        let messages = vec![message("a", false), message("b", true), message("c", true)];
        let flagged = retain_flagged(messages);
        assert_eq!(flagged.len(), 2);
        assert!(flagged.iter().all(|m| m.is_prompt_injection));
    }

    #[test]
    fn test_message_deserializes_without_response() {
        let raw = r#"{
            "id": "m-1",
            "content": "hello",
            "is_prompt_injection": false,
            "created_at": "2026-08-01T12:00:00Z"
        }"#;
        let message: Message = serde_json::from_str(raw).expect("valid message");
        assert_eq!(message.response, None);
        assert!(!message.is_prompt_injection);
    }
}
