//! Home-page content sections between the hero and the offer.

use dioxus::prelude::*;

use crate::i18n::{t, t_len, t_list, use_lang};
use crate::scroll::{use_scroll_report, Section};

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

/// Score shown for a manually written memo.
pub const TRADITIONAL_SCORE: u32 = 35;
/// Score the counter animates to.
pub const CLOSER_SCORE: u32 = 58;

const COUNTER_STEPS: u32 = 60;
#[cfg(target_arch = "wasm32")]
const COUNTER_STEP_MS: u32 = 40;

#[component]
pub fn SectionTitle(eyebrow: String, title: String, subtitle: Element) -> Element {
    rsx! {
        div { class: "section_title",
            div { class: "eyebrow",
                span { class: "eyebrow_rule" }
                span { "{eyebrow}" }
                span { class: "eyebrow_rule flipped" }
            }
            h2 { "{title}" }
            div { class: "section_subtitle", {subtitle} }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CardGridProps {
    prefix: &'static str,
    icons: [&'static str; 3],
    #[props(default = "card")]
    card_class: &'static str,
}

/// Cards read from `{prefix}.items[i].title` / `.desc`.
#[component]
fn CardGrid(props: CardGridProps) -> Element {
    let lang = use_lang()();
    let count = t_len(lang, &format!("{}.items", props.prefix));

    rsx! {
        div { class: "card_grid",
            for i in 0..count {
                div { key: "{i}", class: props.card_class,
                    div { class: "card_icon", {props.icons.get(i).copied().unwrap_or("•").to_string()} }
                    h3 { {t(lang, &format!("{}.items.{i}.title", props.prefix))} }
                    p { {t(lang, &format!("{}.items.{i}.desc", props.prefix))} }
                }
            }
        }
    }
}

#[component]
pub fn ProblemSection() -> Element {
    let lang = use_lang()();

    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }

        section { id: Section::Problem.id(), class: "landing_section",
            div { class: "container",
                SectionTitle {
                    eyebrow: t(lang, "problem.eyebrow"),
                    title: t(lang, "problem.title"),
                    subtitle: rsx! { {t(lang, "problem.subtitle")} },
                }
                CardGrid { prefix: "problem", icons: ["⏱", "⚠", "€"] }
            }
        }
    }
}

#[component]
pub fn ImpactSection() -> Element {
    let lang = use_lang()();

    rsx! {
        section { id: Section::Impact.id(), class: "landing_section impact",
            div { class: "container",
                SectionTitle {
                    eyebrow: t(lang, "impact.eyebrow"),
                    title: t(lang, "impact.title"),
                    subtitle: rsx! {
                        {t(lang, "impact.subtitle_before")}
                        " "
                        strong { {t(lang, "impact.subtitle_strong")} }
                        {t(lang, "impact.subtitle_after")}
                    },
                }

                div { class: "impact_grid",
                    div { class: "score_card traditional",
                        span { class: "score_tag", {t(lang, "impact.traditional.tag")} }
                        div { class: "score_head", {t(lang, "impact.traditional.label")} }
                        div { class: "score",
                            "{TRADITIONAL_SCORE}"
                            span { class: "score_unit", {t(lang, "impact.out_of")} }
                        }
                        ul {
                            for (i, point) in t_list(lang, "impact.traditional.points").into_iter().enumerate() {
                                li { key: "{i}", span { class: "cross", "✕" } "{point}" }
                            }
                        }
                    }

                    div { class: "score_card closer",
                        div { class: "score_head",
                            span { {t(lang, "impact.closer.label")} }
                            span { class: "optimized", {t(lang, "impact.closer.badge")} }
                        }
                        div { class: "score",
                            ScoreCounter { target: CLOSER_SCORE }
                            span { class: "score_unit", {t(lang, "impact.out_of")} }
                        }
                        ul {
                            for (i, point) in t_list(lang, "impact.closer.points").into_iter().enumerate() {
                                li { key: "{i}", span { class: "tick", "✓" } "{point}" }
                            }
                        }
                        div { class: "awarded", "✓ " {t(lang, "impact.closer.result")} }
                    }
                }
            }
        }
    }
}

/// Counts from zero to `target` the first time the impact section scrolls
/// into view.
#[component]
fn ScoreCounter(target: u32) -> Element {
    let report = use_scroll_report();
    let mut value = use_signal(|| 0u32);
    let mut started = use_signal(|| false);

    use_effect(move || {
        let in_view = report.read().is_visible(Section::Impact);
        if !in_view || *started.peek() {
            return;
        }
        started.set(true);
        spawn(async move {
            for step in 1..=COUNTER_STEPS {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::TimeoutFuture::new(COUNTER_STEP_MS).await;
                value.set(ease_out_value(target, step, COUNTER_STEPS));
            }
        });
    });

    rsx! { span { class: "counter", "{value}" } }
}

/// Cubic ease-out from 0 to `target`, rounded to the nearest integer.
pub fn ease_out_value(target: u32, step: u32, steps: u32) -> u32 {
    if steps == 0 || step >= steps {
        return target;
    }
    let progress = f64::from(step) / f64::from(steps);
    let eased = 1.0 - (1.0 - progress).powi(3);
    (f64::from(target) * eased).round() as u32
}

#[component]
pub fn SolutionSection() -> Element {
    let lang = use_lang()();

    rsx! {
        section { id: Section::Solution.id(), class: "landing_section",
            div { class: "container",
                SectionTitle {
                    eyebrow: t(lang, "solution.eyebrow"),
                    title: t(lang, "solution.title"),
                    subtitle: rsx! { {t(lang, "solution.subtitle")} },
                }
                CardGrid { prefix: "solution", icons: ["🧠", "📄", "🛡"], card_class: "card soft" }
            }
        }
    }
}
