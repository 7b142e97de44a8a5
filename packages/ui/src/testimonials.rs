//! Remote testimonials with a fixed fallback.

use std::fmt::Display;

use content::data::fallback_testimonials;
use content::Testimonial;
use dioxus::prelude::*;

pub const FALLBACK_NOTICE: &str =
    "Couldn't load the latest testimonials. Showing a few highlights instead.";

#[derive(Clone, Debug, PartialEq)]
pub struct TestimonialsState {
    pub items: Vec<Testimonial>,
    pub loading: bool,
    /// Inline notice shown when the fallback list is in use.
    pub error: Option<String>,
}

impl Default for TestimonialsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl TestimonialsState {
    /// Map a fetch result to what the section renders. Failures are logged
    /// once and replaced by the fallback list; nothing is retried.
    pub fn resolve<E: Display>(result: Result<Vec<Testimonial>, E>) -> Self {
        match result {
            Ok(items) => Self {
                items,
                loading: false,
                error: None,
            },
            Err(e) => {
                tracing::error!("Failed to fetch testimonials: {}", e);
                Self {
                    items: fallback_testimonials(),
                    loading: false,
                    error: Some(FALLBACK_NOTICE.to_string()),
                }
            }
        }
    }
}

/// Fetch `GET /api/public/testimonials` once on mount.
pub fn use_testimonials() -> Signal<TestimonialsState> {
    let mut state = use_signal(TestimonialsState::default);

    let _ = use_resource(move || async move {
        let result = api::get_public_testimonials().await;
        state.set(TestimonialsState::resolve(result));
    });

    state
}

/// Same fallback rules for the admin listing, which includes inactive rows.
pub fn use_all_testimonials() -> Signal<TestimonialsState> {
    let mut state = use_signal(TestimonialsState::default);

    let _ = use_resource(move || async move {
        let result = api::list_testimonials().await;
        state.set(TestimonialsState::resolve(result));
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_uses_fallback() {
        let state = TestimonialsState::resolve::<&str>(Err("connection refused"));
        assert_eq!(state.items, fallback_testimonials());
        assert_eq!(state.items.len(), 2);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(FALLBACK_NOTICE));
    }

    #[test]
    fn test_success_keeps_remote_list() {
        let mut remote = fallback_testimonials();
        remote.truncate(1);
        remote[0].name = "Remote".into();
        let state = TestimonialsState::resolve::<&str>(Ok(remote.clone()));
        assert_eq!(state.items, remote);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_empty_success_is_not_an_error() {
        let state = TestimonialsState::resolve::<&str>(Ok(Vec::new()));
        assert!(state.items.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_default_is_loading() {
        assert!(TestimonialsState::default().loading);
    }
}
