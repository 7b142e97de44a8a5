//! Site content and the small amount of state logic behind the portfolio UI.
//!
//! Nothing in this crate depends on Dioxus. Components in the `ui` crate hold
//! these types in signals and drive them from DOM events and timers.

pub mod avatar;
pub mod carousel;
pub mod config;
pub mod data;
pub mod effects;
pub mod models;
pub mod nav;
pub mod notifications;
pub mod reveal;
pub mod theme;

pub use carousel::{Carousel, DragOutcome, Phase, SlideDirection};
pub use config::{ConfigError, SiteConfig};
pub use models::{
    EducationItem, EducationKind, ExperienceItem, Project, ProjectCategory, ServiceDetail,
    ServiceIcon, Skill, SkillGroup, Testimonial,
};
pub use nav::{NavGroup, NavIcon, NavItem, NavMatch};
pub use notifications::{Notification, NotificationLevel, Notifications};
pub use reveal::RevealLatch;
pub use theme::{ThemePreference, THEME_STORAGE_KEY};
