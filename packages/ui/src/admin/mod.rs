//! Dashboard shell: sidebar with search, header with notifications.

mod notifications;
pub use notifications::{notify, use_notifications, NotificationBell, NotificationPanel};

mod sidebar;
pub use sidebar::AdminSidebar;

mod layout;
pub use layout::AdminLayoutView;
