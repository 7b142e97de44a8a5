//! This crate contains all shared UI for the workspace.
//!
//! | Module | Contents |
//! |--------|----------|
//! | `sections` | The public one-page site: hero, about, experience, education, projects, services, testimonials, contact, footer. |
//! | `admin` | Dashboard shell: searchable sidebar, notifications bell and panel, layout. |
//! | `views` | Page-level views the `web` router mounts. |
//! | `carousel`, `reveal`, `backgrounds` | Interactive pieces driven by state from the `content` crate. |
//! | `theme`, `site` | App-wide context: theme preference and site configuration. |

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brands {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

pub const BASE_CSS: Asset = asset!("/assets/styling/base.css");

pub mod clock;

mod site;
pub use site::{load_site_config, use_site_config};

mod theme;
pub use theme::{
    apply_theme, load_theme_from_storage, use_theme, ThemeSelector, ThemeSignal, ThemeToggle,
};

mod reveal;
pub use reveal::Reveal;

mod avatar;
pub use avatar::{Avatar, OptionalImage};

mod backgrounds;
pub use backgrounds::{TechBackground, TechIconsBackground};

pub mod testimonials;
pub use testimonials::{use_all_testimonials, use_testimonials, TestimonialsState};

mod carousel;
pub use carousel::{TestimonialCard, TestimonialCarousel};

mod navbar;
pub use navbar::Navbar;

pub mod sections;

pub mod admin;
pub use admin::{notify, use_notifications, AdminLayoutView};

pub mod views;
