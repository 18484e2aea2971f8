use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBell, FaCircleExclamation, FaXmark};
use dioxus_free_icons::Icon;

use crate::model::notification::{self, NotificationFeed, NotificationKind};

fn icon_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Warning => "text-warning",
        NotificationKind::Info => "text-info",
        NotificationKind::Success => "text-success",
    }
}

/// Header bell with unread badge that opens the notification sheet.
#[component]
pub fn NotificationButton() -> Element {
    let mut feed = use_signal(|| NotificationFeed::new(notification::fixtures()));
    let mut open = use_signal(|| false);

    let unread = feed.read().unread_count();

    rsx!(
        button {
            class: "btn btn-ghost btn-sm relative",
            onclick: move |_| open.set(true),
            Icon { width: 16, height: 16, icon: FaBell }
            if unread > 0 {
                span {
                    class: "badge badge-error badge-xs absolute -top-1 -right-1",
                    "{unread}"
                }
            }
        }
        if open() {
            div {
                class: "fixed inset-0 z-40 bg-black/40",
                onclick: move |_| open.set(false),
            }
            aside {
                class: "fixed right-0 top-0 z-50 h-full w-full sm:max-w-md bg-base-100 shadow-xl p-6 flex flex-col gap-4",
                div {
                    class: "flex items-center justify-between",
                    h2 {
                        class: "flex items-center gap-2 text-lg font-semibold",
                        Icon { width: 20, height: 20, icon: FaBell }
                        "Notificaciones"
                    }
                    div {
                        class: "flex items-center gap-2",
                        if unread > 0 {
                            button {
                                class: "btn btn-ghost btn-xs",
                                onclick: move |_| feed.write().mark_all_read(),
                                "Marcar todas como leídas"
                            }
                        }
                        button {
                            class: "btn btn-ghost btn-sm btn-square",
                            onclick: move |_| open.set(false),
                            Icon { width: 14, height: 14, icon: FaXmark }
                        }
                    }
                }
                p { class: "text-sm text-base-content/60", "{feed.read().unread_summary()}" }
                div {
                    class: "flex-1 overflow-y-auto space-y-3 pr-2",
                    for item in feed.read().items().iter().cloned() {
                        div {
                            key: "{item.id}",
                            class: if item.read { "card card-border cursor-pointer" } else { "card card-border cursor-pointer bg-primary/10 border-primary/20" },
                            onclick: {
                                let id = item.id.clone();
                                move |_| {
                                    feed.write().mark_read(&id);
                                }
                            },
                            div {
                                class: "card-body p-4 flex flex-row items-start gap-3",
                                span {
                                    class: "mt-1 {icon_class(item.kind)}",
                                    Icon { width: 20, height: 20, icon: FaCircleExclamation }
                                }
                                div {
                                    class: "flex-1 min-w-0",
                                    div {
                                        class: "flex items-center gap-2 mb-1",
                                        h3 { class: "font-medium text-sm truncate", "{item.title}" }
                                        if !item.read {
                                            span { class: "h-2 w-2 rounded-full bg-primary" }
                                        }
                                    }
                                    p { class: "text-sm text-base-content/70 mb-2", "{item.message}" }
                                    div {
                                        class: "flex items-center gap-2",
                                        span { class: "badge badge-sm {item.kind.badge_class()}", "{item.kind.label()}" }
                                        span { class: "text-xs text-base-content/60", "{item.date}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
