mod admin_layout;
pub use admin_layout::AdminLayout;

mod admin;
pub use admin::{AdminProjects, AdminServices, AdminSettings, AdminTestimonials, Dashboard};

mod home;
pub use home::Home;

mod not_found;
pub use not_found::NotFound;
