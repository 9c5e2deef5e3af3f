use dioxus::logger::tracing;
use dioxus::prelude::*;
use serde_json::Value;
use std::sync::OnceLock;

/// localStorage key holding the chosen language code.
pub const LANG_STORAGE_KEY: &str = "closerai_lang";

const FR_JSON: &str = include_str!("../locales/fr.json");
const EN_JSON: &str = include_str!("../locales/en.json");

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    Fr,
    #[default]
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "fr" | "fr-fr" => Some(Lang::Fr),
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            _ => None,
        }
    }

    /// Map a browser locale such as `fr-CA` or `de-DE`: only French is
    /// recognised, everything else reads English.
    pub fn from_browser_locale(locale: &str) -> Self {
        if locale.trim().to_ascii_lowercase().starts_with("fr") {
            Lang::Fr
        } else {
            Lang::En
        }
    }

    pub fn other(self) -> Self {
        match self {
            Lang::Fr => Lang::En,
            Lang::En => Lang::Fr,
        }
    }
}

/// Precedence: saved choice, then browser locale, then English.
pub fn initial_lang(saved: Option<&str>, browser_locale: Option<&str>) -> Lang {
    if let Some(lang) = saved.and_then(Lang::from_code) {
        return lang;
    }
    browser_locale
        .map(Lang::from_browser_locale)
        .unwrap_or_default()
}

/// Synchronous key/value storage for user preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

pub fn load_lang(store: &dyn PreferenceStore, browser_locale: Option<&str>) -> Lang {
    initial_lang(store.load(LANG_STORAGE_KEY).as_deref(), browser_locale)
}

pub fn persist_lang(store: &dyn PreferenceStore, lang: Lang) {
    store.save(LANG_STORAGE_KEY, lang.code());
}

/// `window.localStorage`. Reads nothing and writes nothing outside the browser
/// or when storage is blocked.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    tracing::debug!("i18n: localStorage rejected {key}");
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
        }
    }
}

/// `navigator.language`, when running in a browser.
pub fn browser_locale() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.navigator().language()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Read-only nested translation documents, one per language.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationTable {
    fr: Value,
    en: Value,
}

impl TranslationTable {
    pub fn from_json(fr: &str, en: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            fr: serde_json::from_str(fr)?,
            en: serde_json::from_str(en)?,
        })
    }

    /// Table every lookup misses.
    pub fn empty() -> Self {
        Self {
            fr: Value::Null,
            en: Value::Null,
        }
    }

    /// The tables compiled into the binary, parsed on first use.
    pub fn bundled() -> &'static TranslationTable {
        static TABLE: OnceLock<TranslationTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            TranslationTable::from_json(FR_JSON, EN_JSON).unwrap_or_else(|err| {
                tracing::warn!("i18n: bundled translations are invalid: {err}");
                TranslationTable::empty()
            })
        })
    }

    fn root(&self, lang: Lang) -> &Value {
        match lang {
            Lang::Fr => &self.fr,
            Lang::En => &self.en,
        }
    }

    /// Walk `key_path` segment by segment. Numeric segments index lists.
    pub fn entry(&self, lang: Lang, key_path: &str) -> Option<&Value> {
        key_path
            .split('.')
            .try_fold(self.root(lang), |node, segment| match node {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
    }
}

/// Resolve a key path to its string, or return the key path itself.
pub fn resolve(table: &TranslationTable, lang: Lang, key_path: &str) -> String {
    match table.entry(lang, key_path) {
        Some(Value::String(text)) => text.clone(),
        _ => key_path.to_string(),
    }
}

/// Resolve a key path to its list of strings. A single string resolves to a
/// one-item list; anything unresolved yields `[key_path]`.
pub fn resolve_list(table: &TranslationTable, lang: Lang, key_path: &str) -> Vec<String> {
    match table.entry(lang, key_path) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(text) => text.clone(),
                _ => key_path.to_string(),
            })
            .collect(),
        Some(Value::String(text)) => vec![text.clone()],
        _ => vec![key_path.to_string()],
    }
}

/// Number of items under a list entry; 0 when the path is not a list.
pub fn resolve_len(table: &TranslationTable, lang: Lang, key_path: &str) -> usize {
    match table.entry(lang, key_path) {
        Some(Value::Array(items)) => items.len(),
        _ => 0,
    }
}

/// Translate a key for a given language. Falls back to the key if missing.
pub fn t(lang: Lang, key: &str) -> String {
    resolve(TranslationTable::bundled(), lang, key)
}

pub fn t_list(lang: Lang, key: &str) -> Vec<String> {
    resolve_list(TranslationTable::bundled(), lang, key)
}

pub fn t_len(lang: Lang, key: &str) -> usize {
    resolve_len(TranslationTable::bundled(), lang, key)
}

/// Provide `Signal<Lang>` to the component tree.
///
/// Server rendering and the first client render use the default language;
/// the stored or browser language is applied right after mount so hydration
/// sees the same markup.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut lang = use_signal(Lang::default);
    use_context_provider(|| lang);

    use_effect(move || {
        let next = load_lang(&BrowserStore, browser_locale().as_deref());
        if next != *lang.peek() {
            tracing::debug!("i18n: startup language {}", next.code());
            lang.set(next);
        }
    });

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    // Fallback for mis-ordered providers to avoid panics in production.
    tracing::warn!("i18n: missing I18nProvider context, using local default signal");
    use_signal(Lang::default)
}

/// Switch language and persist the choice immediately.
pub fn set_lang(mut lang_signal: Signal<Lang>, lang: Lang) {
    lang_signal.set(lang);
    persist_lang(&BrowserStore, lang);
}

/// FR / EN switch shown in the header.
#[component]
pub fn LangToggle() -> Element {
    let lang_signal = use_lang();
    let lang = lang_signal();
    let label = t(lang, "lang.label");

    rsx! {
        div { class: "lang_toggle", role: "group", "aria-label": "{label}",
            for option in [Lang::Fr, Lang::En] {
                button {
                    key: "{option.code()}",
                    r#type: "button",
                    class: option_class(option == lang),
                    "aria-pressed": option == lang,
                    onclick: move |_| set_lang(lang_signal, option),
                    {t(lang, &format!("lang.{}", option.code()))}
                }
            }
        }
    }
}

fn option_class(active: bool) -> &'static str {
    if active {
        "lang_option active"
    } else {
        "lang_option"
    }
}
