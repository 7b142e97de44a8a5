//! Theme preference context, persistence and selectors.
//!
//! The preference lives in a `Signal<ThemePreference>` provided at the app
//! root and is mirrored to local storage under `content::THEME_STORAGE_KEY`. The
//! `dark` class on the document root is what the stylesheets key off.

use content::ThemePreference;
#[cfg(target_arch = "wasm32")]
use content::THEME_STORAGE_KEY;
use dioxus::prelude::*;

use crate::icons::{FaCircleHalfStroke, FaMoon, FaSun};
use crate::Icon;

pub type ThemeSignal = Signal<ThemePreference>;

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Read the stored preference into `theme` and apply it to the document.
pub fn load_theme_from_storage(theme: &mut ThemeSignal) {
    #[cfg(target_arch = "wasm32")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
        let pref = ThemePreference::from_storage(stored.as_deref());
        theme.set(pref);
        apply_to_document(pref);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

/// Persist `pref` and update the document root class.
pub fn apply_theme(pref: ThemePreference) {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        match storage {
            Some(s) => {
                if s.set_item(THEME_STORAGE_KEY, pref.as_str()).is_err() {
                    tracing::warn!("Could not persist theme preference");
                }
            }
            None => tracing::debug!("Local storage unavailable, theme not persisted"),
        }
        apply_to_document(pref);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("Theme set to {}", pref);
    }
}

#[cfg(target_arch = "wasm32")]
fn apply_to_document(pref: ThemePreference) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let system_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false);
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let _ = root
            .class_list()
            .toggle_with_force("dark", pref.is_dark(system_dark));
    }
}

fn set_theme(theme: &mut ThemeSignal, pref: ThemePreference) {
    apply_theme(pref);
    theme.set(pref);
}

/// Compact navbar button cycling light → dark → system.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let current = theme();
    let next = current.cycle();

    rsx! {
        button {
            class: "icon-button theme-toggle",
            title: "Theme: {current.label()} (switch to {next.label()})",
            "aria-label": "Switch theme",
            onclick: move |_| set_theme(&mut theme, next),
            ThemeIcon { pref: current }
        }
    }
}

#[component]
fn ThemeIcon(pref: ThemePreference) -> Element {
    match pref {
        ThemePreference::Light => rsx! { Icon { icon: FaSun, width: 14, height: 14 } },
        ThemePreference::Dark => rsx! { Icon { icon: FaMoon, width: 14, height: 14 } },
        ThemePreference::System => rsx! { Icon { icon: FaCircleHalfStroke, width: 14, height: 14 } },
    }
}

/// Three-way selector card row for the settings page.
#[component]
pub fn ThemeSelector() -> Element {
    let mut theme = use_theme();
    let current = theme();

    rsx! {
        div {
            class: "theme-cards",
            for pref in [ThemePreference::System, ThemePreference::Light, ThemePreference::Dark] {
                label {
                    key: "{pref}",
                    class: if current == pref { "theme-card theme-card-active" } else { "theme-card" },
                    onclick: move |_| set_theme(&mut theme, pref),
                    ThemeIcon { pref }
                    span { "{pref.label()}" }
                }
            }
        }
        p {
            class: "muted",
            "Choose how the site appears. System follows your OS preference."
        }
    }
}
