use dioxus::prelude::*;

use crate::i18n::{t, use_lang};
use crate::links::{mailto, CONTACT_EMAIL};
use crate::scroll::scroll_to_top;
use crate::view::{use_view_router, View};

#[component]
pub fn Footer() -> Element {
    let lang = use_lang()();
    let router = use_view_router();

    rsx! {
        footer { class: "site_footer",
            div { class: "container",
                div { class: "footer_grid",
                    div {
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
                        p { class: "footer_tagline", {t(lang, "app.tagline")} }
                    }
                    div { class: "footer_contact",
                        h4 { {t(lang, "footer.contact_title")} }
                        a { href: mailto(CONTACT_EMAIL), "{CONTACT_EMAIL}" }
                        p { class: "hint", {t(lang, "footer.city")} }
                    }
                }
                div { class: "footer_bottom",
                    p { {t(lang, "footer.rights")} }
                    div { class: "footer_links",
                        button {
                            id: "footer_mentions",
                            r#type: "button",
                            onclick: move |_| router.go(View::Mentions),
                            {t(lang, "footer.mentions")}
                        }
                        button {
                            id: "footer_cgv",
                            r#type: "button",
                            onclick: move |_| router.go(View::Cgv),
                            {t(lang, "footer.cgv")}
                        }
                    }
                }
            }
        }
    }
}
