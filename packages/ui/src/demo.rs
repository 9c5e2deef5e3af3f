use dioxus::logger::tracing;
use dioxus::prelude::*;

use api::{CompanySize, LeadDraft};

use crate::i18n::{t, t_list, use_lang};
use crate::scroll::scroll_to_top;
use crate::view::use_view_router;

const DEMO_CSS: Asset = asset!("/assets/styling/demo.css");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Company,
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

/// Keep only ASCII digits.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Demo request form state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadForm {
    pub draft: LeadDraft,
    pub status: SubmitStatus,
}

impl LeadForm {
    pub fn set(&mut self, field: LeadField, value: String) {
        let draft = &mut self.draft;
        match field {
            LeadField::Company => draft.company = value,
            LeadField::FirstName => draft.first_name = value,
            LeadField::LastName => draft.last_name = value,
            LeadField::Email => draft.email = value,
            LeadField::Phone => draft.phone = digits_only(&value),
            LeadField::Message => draft.message = value,
        }
    }

    pub fn set_size(&mut self, code: &str) {
        if let Some(size) = CompanySize::from_code(code) {
            self.draft.company_size = size;
        }
    }

    /// Move to `Sending` and hand back the lead to send. Returns `None`
    /// while a request is in flight or once it has succeeded.
    pub fn begin_submit(&mut self) -> Option<LeadDraft> {
        match self.status {
            SubmitStatus::Sending | SubmitStatus::Success => None,
            SubmitStatus::Idle | SubmitStatus::Error => {
                self.status = SubmitStatus::Sending;
                Some(self.draft.clone())
            }
        }
    }

    /// Record the relay outcome. A failure keeps what was typed so the
    /// visitor can resubmit.
    pub fn finish<E>(&mut self, result: Result<(), E>) {
        match result {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.draft = LeadDraft::default();
            }
            Err(_) => self.status = SubmitStatus::Error,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }
}

#[component]
pub fn DemoPage() -> Element {
    let lang = use_lang()();
    let router = use_view_router();
    let mut form = use_signal(LeadForm::default);

    use_effect(|| scroll_to_top(false));

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(lead) = form.write().begin_submit() else {
            return;
        };
        spawn(async move {
            let result = api::request_demo(lead).await;
            if let Err(e) = &result {
                tracing::warn!("demo: request failed: {e}");
            }
            form.write().finish(result);
        });
    };

    let status = form.read().status;
    let draft = form.read().draft.clone();
    let sending = status == SubmitStatus::Sending;

    rsx! {
        document::Link { rel: "stylesheet", href: DEMO_CSS }

        if status == SubmitStatus::Success {
            section { class: "demo_page centered",
                div { class: "success_card",
                    div { class: "success_icon", "✓" }
                    h2 { {t(lang, "demo.success.title")} }
                    p { {t(lang, "demo.success.body")} }
                    button {
                        class: "btn primary wide",
                        r#type: "button",
                        onclick: move |_| router.back(),
                        {t(lang, "demo.success.back")}
                    }
                }
            }
        } else {
            section { class: "demo_page",
                div { class: "container",
                    button {
                        class: "back_link",
                        r#type: "button",
                        onclick: move |_| router.back(),
                        "← "
                        {t(lang, "demo.back")}
                    }

                    div { class: "demo_grid",
                        div { class: "demo_intro",
                            div { class: "eyebrow left",
                                span { class: "eyebrow_rule" }
                                span { {t(lang, "demo.eyebrow")} }
                            }
                            h1 {
                                {t(lang, "demo.title_before")}
                                " "
                                span { class: "gradient_text", {t(lang, "demo.title_highlight")} }
                            }
                            p { class: "demo_subtitle", {t(lang, "demo.subtitle")} }
                            ul { class: "perks",
                                for (i, perk) in t_list(lang, "demo.perks").into_iter().enumerate() {
                                    li { key: "{i}", span { class: "perk_icon", "★" } "{perk}" }
                                }
                            }
                        }

                        form { id: "demo_form", class: "lead_form", onsubmit: on_submit,
                            div { class: "field",
                                label { r#for: "company", {t(lang, "demo.form.company")} }
                                input {
                                    id: "company",
                                    name: "company",
                                    r#type: "text",
                                    required: true,
                                    placeholder: t(lang, "demo.form.company_ph"),
                                    value: "{draft.company}",
                                    oninput: move |evt| form.write().set(LeadField::Company, evt.value()),
                                }
                            }

                            div { class: "field",
                                label { r#for: "company_size", {t(lang, "demo.form.size")} }
                                select {
                                    id: "company_size",
                                    name: "company_size",
                                    onchange: move |evt| form.write().set_size(&evt.value()),
                                    for size in CompanySize::ALL {
                                        option {
                                            key: "{size.code()}",
                                            value: size.code(),
                                            selected: size == draft.company_size,
                                            {t(lang, &format!("demo.form.sizes.{}", size.code()))}
                                        }
                                    }
                                }
                            }

                            div { class: "field",
                                label { r#for: "firstname", {t(lang, "demo.form.first_name")} }
                                input {
                                    id: "firstname",
                                    name: "firstname",
                                    r#type: "text",
                                    required: true,
                                    placeholder: t(lang, "demo.form.first_name_ph"),
                                    value: "{draft.first_name}",
                                    oninput: move |evt| form.write().set(LeadField::FirstName, evt.value()),
                                }
                            }

                            div { class: "field",
                                label { r#for: "lastname", {t(lang, "demo.form.last_name")} }
                                input {
                                    id: "lastname",
                                    name: "lastname",
                                    r#type: "text",
                                    required: true,
                                    placeholder: t(lang, "demo.form.last_name_ph"),
                                    value: "{draft.last_name}",
                                    oninput: move |evt| form.write().set(LeadField::LastName, evt.value()),
                                }
                            }

                            div { class: "field",
                                label { r#for: "email",
                                    {t(lang, "demo.form.email")}
                                    span { class: "required_mark", " *" }
                                }
                                input {
                                    id: "email",
                                    name: "email",
                                    r#type: "email",
                                    required: true,
                                    placeholder: t(lang, "demo.form.email_ph"),
                                    value: "{draft.email}",
                                    oninput: move |evt| form.write().set(LeadField::Email, evt.value()),
                                }
                            }

                            div { class: "field",
                                label { r#for: "phone", {t(lang, "demo.form.phone")} }
                                input {
                                    id: "phone",
                                    name: "phone",
                                    r#type: "tel",
                                    required: true,
                                    inputmode: "numeric",
                                    pattern: "[0-9]*",
                                    placeholder: t(lang, "demo.form.phone_ph"),
                                    value: "{draft.phone}",
                                    oninput: move |evt| form.write().set(LeadField::Phone, evt.value()),
                                }
                            }

                            div { class: "field full",
                                label { r#for: "message", {t(lang, "demo.form.message")} }
                                textarea {
                                    id: "message",
                                    name: "message",
                                    placeholder: t(lang, "demo.form.message_ph"),
                                    value: "{draft.message}",
                                    oninput: move |evt| form.write().set(LeadField::Message, evt.value()),
                                }
                            }

                            if status == SubmitStatus::Error {
                                div { class: "form_error full", role: "alert",
                                    span { class: "error_icon", "✕" }
                                    p { {t(lang, "demo.form.error")} }
                                }
                            }

                            div { class: "full",
                                button {
                                    id: "demo_submit",
                                    class: "btn primary wide",
                                    r#type: "submit",
                                    disabled: sending,
                                    if sending {
                                        span { class: "spinner" }
                                        {t(lang, "demo.form.sending")}
                                    } else {
                                        {t(lang, "demo.form.submit")}
                                        " →"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
