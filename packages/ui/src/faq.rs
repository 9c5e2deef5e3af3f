use dioxus::prelude::*;

use crate::i18n::{t, t_len, use_lang};
use crate::landing::SectionTitle;

/// Accordion with at most one answer open.
#[component]
pub fn FaqSection() -> Element {
    let lang = use_lang()();
    let mut open = use_signal(|| None::<usize>);
    let count = t_len(lang, "faq.items");

    rsx! {
        section { class: "landing_section faq",
            div { class: "container narrow",
                SectionTitle {
                    eyebrow: t(lang, "faq.eyebrow"),
                    title: t(lang, "faq.title"),
                    subtitle: rsx! { {t(lang, "faq.subtitle")} },
                }

                div { class: "faq_list",
                    for i in 0..count {
                        div {
                            key: "{i}",
                            class: item_class(open() == Some(i)),
                            onclick: move |_| open.set(faq_toggle(open(), i)),
                            div { class: "faq_question",
                                h3 { {t(lang, &format!("faq.items.{i}.question"))} }
                                span { class: "faq_icon", "+" }
                            }
                            if open() == Some(i) {
                                div { class: "faq_answer", {t(lang, &format!("faq.items.{i}.answer"))} }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Clicking the open item closes it; clicking another one replaces it.
pub fn faq_toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

fn item_class(open: bool) -> &'static str {
    if open {
        "faq_item open"
    } else {
        "faq_item"
    }
}
