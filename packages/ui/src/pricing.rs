use dioxus::prelude::*;

use crate::i18n::{t, t_list, use_lang};
use crate::landing::SectionTitle;
use crate::links::{mailto, CHECKOUT_URL, ENTERPRISE_EMAIL};
use crate::scroll::Section;

/// Three-tier offer: public waitlist (not yet open), the founder pack and
/// enterprise on quote.
#[component]
pub fn PricingSection() -> Element {
    let lang = use_lang()();

    rsx! {
        section { id: Section::Offer.id(), class: "landing_section pricing",
            div { class: "container",
                SectionTitle {
                    eyebrow: t(lang, "pricing.eyebrow"),
                    title: t(lang, "pricing.title"),
                    subtitle: rsx! { {t(lang, "pricing.subtitle")} },
                }

                div { class: "pricing_grid",
                    div { class: "tier muted",
                        h3 { {t(lang, "pricing.public.title")} }
                        div { class: "tier_price mono", {t(lang, "pricing.public.date")} }
                        button { class: "tier_btn", r#type: "button", disabled: true,
                            {t(lang, "pricing.public.cta")}
                        }
                    }

                    div { class: "tier featured",
                        span { class: "chip", "✦ " {t(lang, "pricing.founder.badge")} }
                        h3 { {t(lang, "pricing.founder.title")} }
                        div { class: "tier_price",
                            span { class: "amount", {t(lang, "pricing.founder.price")} }
                            span { class: "price_note",
                                span { {t(lang, "pricing.founder.price_unit")} }
                                span { {t(lang, "pricing.founder.price_term")} }
                            }
                        }
                        div { class: "guarantee", "🛡 " {t(lang, "pricing.founder.guarantee")} }
                        a {
                            class: "btn primary wide",
                            href: CHECKOUT_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "🔒 "
                            {t(lang, "pricing.founder.cta")}
                        }
                        p { class: "hint", {t(lang, "pricing.founder.invoice")} }
                        ul { class: "features",
                            for (i, feature) in t_list(lang, "pricing.founder.features").into_iter().enumerate() {
                                li { key: "{i}", span { class: "tick_round", "✓" } "{feature}" }
                            }
                        }
                    }

                    div { class: "tier",
                        h3 { {t(lang, "pricing.enterprise.title")} }
                        div { class: "tier_price", {t(lang, "pricing.enterprise.price")} }
                        a { class: "tier_btn", href: mailto(ENTERPRISE_EMAIL),
                            {t(lang, "pricing.enterprise.cta")}
                        }
                    }
                }
            }
        }
    }
}
