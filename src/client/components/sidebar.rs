use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBookOpen, FaCircleQuestion, FaGear, FaGraduationCap, FaHouse, FaReceipt,
    FaRightFromBracket, FaUser,
};
use dioxus_free_icons::Icon;

use crate::{
    auth::PortalRoute,
    client::{
        router::Route,
        store::{use_auth, use_toaster},
    },
};

#[component]
fn MenuIcon(route: PortalRoute) -> Element {
    match route {
        PortalRoute::PersonalInfo => rsx!(Icon { width: 16, height: 16, icon: FaUser }),
        PortalRoute::Enrollment => rsx!(Icon { width: 16, height: 16, icon: FaGraduationCap }),
        PortalRoute::Finances => rsx!(Icon { width: 16, height: 16, icon: FaReceipt }),
        PortalRoute::Services => rsx!(Icon { width: 16, height: 16, icon: FaGear }),
        _ => rsx!(Icon { width: 16, height: 16, icon: FaHouse }),
    }
}

fn menu_class(active: bool) -> &'static str {
    if active {
        "menu-active flex items-center gap-3"
    } else {
        "flex items-center gap-3"
    }
}

#[component]
pub fn Sidebar(collapsed: Signal<bool>) -> Element {
    let auth = use_auth();
    let mut toaster = use_toaster();
    let current = PortalRoute::from_path(&use_route::<Route>().to_string());
    let student = auth.session();

    let width = if collapsed() { "w-14" } else { "w-64" };

    rsx!(
        aside {
            class: "{width} min-h-screen bg-base-200 border-r border-base-300 flex flex-col transition-all",
            div {
                class: "border-b border-base-300 p-4 flex items-center gap-3",
                div {
                    class: "flex h-8 w-8 shrink-0 items-center justify-center rounded-lg bg-primary text-primary-content",
                    Icon { width: 18, height: 18, icon: FaBookOpen }
                }
                if !collapsed() {
                    div {
                        h2 { class: "text-sm font-semibold", "Portal USM" }
                        p { class: "text-xs text-base-content/60", "Universidad Técnica Federico Santa María" }
                        if let Some(student) = student {
                            p { class: "text-xs text-base-content/70 mt-1", "{student.full_name()}" }
                        }
                    }
                }
            }
            nav {
                class: "flex-1 p-2",
                if !collapsed() {
                    p { class: "px-2 py-1 text-xs font-medium text-base-content/60", "Menú Principal" }
                }
                ul {
                    class: "menu w-full",
                    for item in PortalRoute::MENU {
                        li {
                            key: "{item.path()}",
                            Link {
                                class: menu_class(item == current),
                                to: Route::from(item),
                                MenuIcon { route: item }
                                if !collapsed() {
                                    span { "{item.title()}" }
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "border-t border-base-300 p-2",
                ul {
                    class: "menu w-full",
                    li {
                        button {
                            class: "flex items-center gap-3",
                            onclick: move |_| toaster.info("Ayuda", "Escríbenos a soporte@universidad.edu"),
                            Icon { width: 16, height: 16, icon: FaCircleQuestion }
                            if !collapsed() {
                                span { "Ayuda" }
                            }
                        }
                    }
                    li {
                        button {
                            class: "flex items-center gap-3",
                            onclick: move |_| {
                                let mut auth = auth.clone();
                                async move { auth.logout().await }
                            },
                            Icon { width: 16, height: 16, icon: FaRightFromBracket }
                            if !collapsed() {
                                span { "Cerrar Sesión" }
                            }
                        }
                    }
                }
            }
        }
    )
}
