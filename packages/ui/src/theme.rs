use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");
const FONT_URL: &str =
    "https://fonts.googleapis.com/css2?family=Plus+Jakarta+Sans:wght@400;500;600;700;800&display=swap";

/// Dark indigo palette, typography and the shared button/card styles.
#[component]
pub fn Theme() -> Element {
    rsx! {
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "stylesheet", href: FONT_URL }
        document::Link { rel: "stylesheet", href: THEME_CSS }
    }
}
