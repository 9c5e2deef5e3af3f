use dioxus::prelude::*;

use crate::i18n::{t, use_lang};
use crate::links::BOOKING_URL;
use crate::scroll::{use_scroll_report, Section};

/// Visibility of the floating booking card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingPrompt {
    revealed: bool,
    dismissed: bool,
}

impl BookingPrompt {
    /// Reveal once the offer has been seen. Stays revealed afterwards.
    pub fn observe(self, offer_visible: bool) -> Self {
        Self {
            revealed: self.revealed || (offer_visible && !self.dismissed),
            ..self
        }
    }

    pub fn dismiss(self) -> Self {
        Self {
            revealed: false,
            dismissed: true,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.revealed && !self.dismissed
    }
}

#[component]
pub fn BookingWidget() -> Element {
    let lang = use_lang()();
    let report = use_scroll_report();
    let mut prompt = use_signal(BookingPrompt::default);

    use_effect(move || {
        let visible = report.read().is_visible(Section::Offer);
        let next = prompt.peek().observe(visible);
        if next != *prompt.peek() {
            prompt.set(next);
        }
    });

    if !prompt().is_shown() {
        return rsx! {};
    }

    rsx! {
        aside { class: "booking_widget",
            button {
                class: "booking_close",
                r#type: "button",
                "aria-label": t(lang, "booking.close"),
                onclick: move |_| {
                    let next = prompt.peek().dismiss();
                    prompt.set(next);
                },
                "✕"
            }
            div { class: "booking_head",
                div { class: "booking_avatar",
                    span { {t(lang, "booking.name").chars().next().map(String::from).unwrap_or_default()} }
                    span { class: "online_dot" }
                }
                div {
                    p { class: "booking_name", {t(lang, "booking.name")} }
                    p { class: "booking_role", {t(lang, "booking.role")} }
                }
            }
            p { class: "booking_text",
                {t(lang, "booking.before")}
                " "
                span { class: "highlight", {t(lang, "booking.highlight")} }
                " "
                {t(lang, "booking.after")}
            }
            div { class: "booking_meter", div { class: "booking_meter_fill" } }
            a {
                class: "btn primary wide",
                href: BOOKING_URL,
                target: "_blank",
                rel: "noopener noreferrer",
                {t(lang, "booking.cta")}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_offer_seen() {
        let prompt = BookingPrompt::default().observe(false);
        assert!(!prompt.is_shown());
        assert!(prompt.observe(true).is_shown());
    }

    #[test]
    fn stays_after_scrolling_past() {
        let prompt = BookingPrompt::default().observe(true).observe(false);
        assert!(prompt.is_shown());
    }

    #[test]
    fn dismissal_is_final() {
        let prompt = BookingPrompt::default().observe(true).dismiss();
        assert!(!prompt.is_shown());
        assert!(!prompt.observe(true).is_shown());
    }
}
