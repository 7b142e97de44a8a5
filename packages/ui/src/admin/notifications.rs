use content::{NotificationLevel, Notifications};
use dioxus::prelude::*;

use crate::clock::clock_label;
use crate::icons::{
    FaBell, FaCircleCheck, FaCircleInfo, FaCircleXmark, FaTriangleExclamation, FaXmark,
};
use crate::Icon;

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// Push a notification stamped with the current local time.
pub fn notify(
    notifications: &mut Signal<Notifications>,
    level: NotificationLevel,
    title: &str,
    message: &str,
) {
    let time = clock_label();
    notifications.write().push(level, title, message, &time);
}

/// Header button with an unread badge. Toggles `open`.
#[component]
pub fn NotificationBell(open: Signal<bool>) -> Element {
    let notifications = use_notifications();
    let unread = notifications().unread_count();
    let mut open = open;

    rsx! {
        button {
            class: if open() { "icon-button notification-bell active" } else { "icon-button notification-bell" },
            title: "Notifications",
            "aria-label": "Notifications ({unread} unread)",
            onclick: move |_| open.toggle(),
            Icon { icon: FaBell, width: 14, height: 14 }
            if unread > 0 {
                span { class: "notification-badge", "{unread}" }
            }
        }
    }
}

#[component]
pub fn NotificationPanel(open: Signal<bool>) -> Element {
    let mut notifications = use_notifications();
    let mut open = open;

    if !open() {
        return rsx! {};
    }

    let current = notifications();
    let unread = current.unread_count();

    rsx! {
        div {
            class: "notification-panel",
            div {
                class: "notification-panel-header",
                span { "Notifications" }
                div {
                    class: "notification-panel-actions",
                    button {
                        disabled: unread == 0,
                        onclick: move |_| notifications.write().mark_all_read(),
                        "Mark all read"
                    }
                    button {
                        onclick: move |_| notifications.write().clear(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| open.set(false),
                        "Close"
                    }
                }
            }
            div {
                class: "notification-entries",
                if current.items().is_empty() {
                    p { class: "muted notification-empty", "You're all caught up." }
                }
                for n in current.newest_first() {
                    div {
                        key: "{n.id}",
                        class: if n.read { "notification-entry {level_class(n.level)}" } else { "notification-entry unread {level_class(n.level)}" },
                        onclick: {
                            let id = n.id;
                            move |_| {
                                notifications.write().mark_read(id);
                            }
                        },
                        span { class: "notification-icon", LevelIcon { level: n.level } }
                        div {
                            class: "notification-text",
                            strong { "{n.title}" }
                            span { "{n.message}" }
                        }
                        span { class: "notification-time", "{n.time}" }
                        button {
                            class: "notification-dismiss",
                            title: "Dismiss",
                            "aria-label": "Dismiss notification",
                            onclick: {
                                let id = n.id;
                                move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    notifications.write().dismiss(id);
                                }
                            },
                            Icon { icon: FaXmark, width: 10, height: 10 }
                        }
                    }
                }
            }
        }
    }
}

fn level_class(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Info => "info",
        NotificationLevel::Success => "success",
        NotificationLevel::Warning => "warning",
        NotificationLevel::Error => "error",
    }
}

#[component]
fn LevelIcon(level: NotificationLevel) -> Element {
    match level {
        NotificationLevel::Info => rsx! { Icon { icon: FaCircleInfo, width: 14, height: 14 } },
        NotificationLevel::Success => rsx! { Icon { icon: FaCircleCheck, width: 14, height: 14 } },
        NotificationLevel::Warning => rsx! { Icon { icon: FaTriangleExclamation, width: 14, height: 14 } },
        NotificationLevel::Error => rsx! { Icon { icon: FaCircleXmark, width: 14, height: 14 } },
    }
}
