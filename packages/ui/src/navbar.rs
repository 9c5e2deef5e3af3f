use dioxus::prelude::*;

use crate::i18n::{t, use_lang, LangToggle};
use crate::scroll::{
    scroll_to_section, scroll_to_section_after_render, scroll_to_top, use_scroll_report, Section,
};
use crate::view::{use_view_router, View, ViewRouter};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Fixed header: brand, section links with the active pill, demo CTA,
/// language switch and the mobile menu overlay.
#[component]
pub fn Navbar() -> Element {
    let lang = use_lang()();
    let router = use_view_router();
    let report = use_scroll_report();
    let mut menu_open = use_signal(|| false);
    let mut hovered = use_signal(|| None::<Section>);

    let scrolled = report.read().is_scrolled();
    let active = if router.current() == View::Home {
        report.read().active_section()
    } else {
        None
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { class: "site_header",
            div { class: header_class(scrolled),
                button {
                    class: "brand",
                    r#type: "button",
                    onclick: move |_| {
                        router.go(View::Home);
                        scroll_to_top(true);
                    },
                    span { class: "brand_mark", "✦" }
                    span { class: "brand_name", {t(lang, "app.name")} }
                }

                nav { class: "nav_links",
                    ul { onmouseleave: move |_| hovered.set(None),
                        for section in Section::ALL {
                            li { key: "{section.id()}", class: "nav_item",
                                a {
                                    class: link_class(active == Some(section) || hovered() == Some(section)),
                                    href: "#{section.id()}",
                                    onmouseenter: move |_| hovered.set(Some(section)),
                                    onclick: move |evt| {
                                        evt.prevent_default();
                                        menu_open.set(false);
                                        go_to_section(router, section);
                                    },
                                    {t(lang, section.label_key())}
                                }
                                if show_pill(active == Some(section), hovered(), section) {
                                    span { class: "nav_pill" }
                                }
                            }
                        }
                    }
                }

                div { class: "nav_actions",
                    LangToggle {}
                    button {
                        class: "nav_cta",
                        r#type: "button",
                        onclick: move |_| router.go(View::Demo),
                        span { class: "pulse_dot" }
                        span { {t(lang, "nav.book_demo")} }
                    }
                    button {
                        class: "menu_toggle",
                        r#type: "button",
                        "aria-label": t(lang, "nav.open_menu"),
                        onclick: move |_| menu_open.set(true),
                        "☰"
                    }
                }
            }
        }

        if menu_open() {
            div { class: "mobile_menu",
                button {
                    class: "menu_close",
                    r#type: "button",
                    "aria-label": t(lang, "nav.close_menu"),
                    onclick: move |_| menu_open.set(false),
                    "✕"
                }
                div { class: "mobile_links",
                    for section in Section::ALL {
                        a {
                            key: "{section.id()}",
                            class: mobile_link_class(active == Some(section)),
                            href: "#{section.id()}",
                            onclick: move |evt| {
                                evt.prevent_default();
                                menu_open.set(false);
                                go_to_section(router, section);
                            },
                            {t(lang, section.label_key())}
                        }
                    }
                    button {
                        class: "btn primary mobile_cta",
                        r#type: "button",
                        onclick: move |_| {
                            menu_open.set(false);
                            router.go(View::Demo);
                        },
                        {t(lang, "nav.book_my_demo")}
                        " →"
                    }
                }
            }
        }
    }
}

/// Sections only exist on the home view; switch first, then scroll once
/// they are mounted.
fn go_to_section(router: ViewRouter, section: Section) {
    if router.current() == View::Home {
        scroll_to_section(section);
    } else {
        router.go(View::Home);
        scroll_to_section_after_render(section);
    }
}

fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "header_bar compact"
    } else {
        "header_bar"
    }
}

fn link_class(highlighted: bool) -> &'static str {
    if highlighted {
        "nav_link highlighted"
    } else {
        "nav_link"
    }
}

fn mobile_link_class(active: bool) -> &'static str {
    if active {
        "mobile_link active"
    } else {
        "mobile_link"
    }
}

/// The pill follows the hovered link, and rests on the active one when
/// nothing is hovered.
fn show_pill(is_active: bool, hovered: Option<Section>, section: Section) -> bool {
    match hovered {
        Some(h) => h == section,
        None => is_active,
    }
}
