use dioxus::prelude::*;

use crate::i18n::{t, t_len, t_list, use_lang};
use crate::scroll::scroll_to_top;
use crate::view::use_view_router;

const LEGAL_CSS: Asset = asset!("/assets/styling/legal.css");

/// Static legal documents rendered from the translation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalDoc {
    Mentions,
    Cgv,
}

impl LegalDoc {
    fn key(self) -> &'static str {
        match self {
            LegalDoc::Mentions => "legal.mentions",
            LegalDoc::Cgv => "legal.cgv",
        }
    }

    fn has_preamble(self) -> bool {
        matches!(self, LegalDoc::Cgv)
    }
}

#[component]
pub fn LegalPage(doc: LegalDoc) -> Element {
    let lang = use_lang()();
    let router = use_view_router();
    let base = doc.key();
    let section_count = t_len(lang, &format!("{base}.sections"));

    use_effect(|| scroll_to_top(false));

    rsx! {
        document::Link { rel: "stylesheet", href: LEGAL_CSS }

        section { class: "legal_page",
            div { class: "container narrow",
                button {
                    class: "back_link",
                    r#type: "button",
                    onclick: move |_| router.back(),
                    "← "
                    {t(lang, "legal.back")}
                }

                article { class: "legal_card",
                    header { class: "legal_header",
                        h1 { {t(lang, &format!("{base}.title"))} }
                        p { class: "hint", {t(lang, "legal.updated")} }
                    }

                    if doc.has_preamble() {
                        p { class: "legal_preamble", {t(lang, &format!("{base}.preamble"))} }
                    }

                    for i in 0..section_count {
                        div { key: "{i}", class: "legal_section",
                            h2 { {t(lang, &format!("{base}.sections.{i}.title"))} }
                            for (j, paragraph) in t_list(lang, &format!("{base}.sections.{i}.paragraphs")).into_iter().enumerate() {
                                p { key: "{j}", "{paragraph}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
