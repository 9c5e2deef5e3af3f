use dioxus::prelude::*;

use crate::i18n::{t, t_list, use_lang};
use crate::scroll::{scroll_to_anchor, Section};

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    let lang = use_lang()();
    let title = t_list(lang, "hero.title");

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { id: "hero", class: "hero",
            div { class: "glow glow_top" }
            div { class: "container hero_grid",
                div { class: "hero_copy",
                    div { class: "badge",
                        span { class: "ping_dot" }
                        {t(lang, "hero.badge")}
                    }

                    h1 { class: "hero_title",
                        for (i, line) in title.into_iter().enumerate() {
                            span { key: "{i}", class: title_line_class(i), "{line}" }
                        }
                    }

                    p { class: "hero_subtitle", {t(lang, "hero.subtitle")} }

                    div { class: "cta_row",
                        a {
                            class: "btn primary",
                            href: "#pricing",
                            onclick: move |evt| {
                                evt.prevent_default();
                                scroll_to_anchor(Section::Offer);
                            },
                            {t(lang, "hero.cta_offer")}
                            " →"
                        }
                        a {
                            class: "btn ghost",
                            href: "#process",
                            onclick: move |evt| {
                                evt.prevent_default();
                                scroll_to_anchor(Section::Impact);
                            },
                            span { class: "play_icon", "▶" }
                            {t(lang, "hero.cta_how")}
                        }
                    }

                    div { class: "social_proof",
                        div { class: "stars", "★★★★★" }
                        p {
                            strong { {t(lang, "hero.proof_strong")} }
                            " "
                            {t(lang, "hero.proof_rest")}
                        }
                    }
                }

                EditorMock {}
            }
        }
    }
}

/// Decorative editor window showing a generated paragraph.
#[component]
fn EditorMock() -> Element {
    let lang = use_lang()();

    rsx! {
        div { class: "editor_mock", "aria-hidden": "true",
            div { class: "editor_bar",
                span { class: "dot red" }
                span { class: "dot yellow" }
                span { class: "dot green" }
                span { class: "editor_url", "🔒 " {t(lang, "hero.mock.url")} }
            }
            div { class: "editor_body",
                div { class: "editor_prompt",
                    span { class: "skeleton short" }
                    span { class: "skeleton long" }
                }
                div { class: "editor_output",
                    div { class: "editor_output_head",
                        span { class: "editor_tag", "✦ " {t(lang, "hero.mock.tag")} }
                        span { class: "editor_format", {t(lang, "hero.mock.format")} }
                    }
                    p { class: "editor_excerpt",
                        {t(lang, "hero.mock.excerpt")}
                        span { class: "caret" }
                    }
                    div { class: "editor_checks",
                        span { class: "check ok", "✓ " {t(lang, "hero.mock.check_cctp")} }
                        span { class: "check style", {t(lang, "hero.mock.check_style")} }
                    }
                }
            }
        }
    }
}

/// The middle line of the headline carries the gradient, the last one is muted.
fn title_line_class(index: usize) -> &'static str {
    match index {
        1 => "title_line gradient",
        2 => "title_line muted",
        _ => "title_line",
    }
}
