//! This crate contains all shared UI for the workspace.

mod i18n;
pub use i18n::{
    set_lang, t, t_len, t_list, use_lang, I18nProvider, Lang, LangToggle, TranslationTable,
    LANG_STORAGE_KEY,
};

mod view;
pub use view::{use_view_router, NavAction, View, ViewRouter, ViewRouterProvider, ViewState};

mod scroll;
pub use scroll::{use_scroll_report, ScrollProvider, ScrollReport, Section};

mod links;

mod theme;
pub use theme::Theme;

mod navbar;
pub use navbar::Navbar;

mod hero;
pub use hero::Hero;

mod landing;
pub use landing::{ImpactSection, ProblemSection, SectionTitle, SolutionSection};

mod pricing;
pub use pricing::PricingSection;

mod faq;
pub use faq::FaqSection;

mod booking;
pub use booking::BookingWidget;

mod footer;
pub use footer::Footer;

mod legal;
pub use legal::{LegalDoc, LegalPage};

mod demo;
pub use demo::{digits_only, DemoPage, LeadForm, SubmitStatus};
