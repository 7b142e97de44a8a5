mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod home;
pub use home::HomeView;

mod dashboard;
pub use dashboard::DashboardView;

mod testimonials_admin;
pub use testimonials_admin::TestimonialsAdminView;

mod projects_admin;
pub use projects_admin::ProjectsAdminView;

mod services_admin;
pub use services_admin::ServicesAdminView;

mod settings;
pub use settings::SettingsView;

mod not_found;
pub use not_found::NotFoundView;
