use dioxus::prelude::*;
use ui::{LegalDoc, LegalPage};

#[component]
pub fn Mentions() -> Element {
    rsx! { LegalPage { doc: LegalDoc::Mentions } }
}

#[component]
pub fn Cgv() -> Element {
    rsx! { LegalPage { doc: LegalDoc::Cgv } }
}
