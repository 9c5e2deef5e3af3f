use dioxus::prelude::*;
use ui::{
    BookingWidget, FaqSection, Hero, ImpactSection, PricingSection, ProblemSection,
    SolutionSection,
};

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        ProblemSection {}
        ImpactSection {}
        SolutionSection {}
        PricingSection {}
        FaqSection {}
        BookingWidget {}
    }
}
