use dioxus::prelude::*;
use ui::AdminLayoutView;

use crate::Route;

#[component]
pub fn AdminLayout() -> Element {
    let nav = use_navigator();
    let active_path = use_route::<Route>().to_string();

    // Every sidebar href is a route of this app; "/:..segments" catches the rest.
    let on_navigate = move |href: String| {
        if let Ok(route) = href.parse::<Route>() {
            nav.push(route);
        }
    };

    rsx! {
        AdminLayoutView {
            active_path,
            on_navigate,
            Outlet::<Route> {}
        }
    }
}
