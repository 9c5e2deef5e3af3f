use dioxus::prelude::*;
use ui::DemoPage;

#[component]
pub fn Demo() -> Element {
    rsx! { DemoPage {} }
}
