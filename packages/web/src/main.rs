use dioxus::prelude::*;

use ui::View;
use views::{Cgv, Demo, Home, Mentions};

mod views;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    {
        init_tracing();
        init_server_state();
    }

    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // The launcher may already have installed a subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(feature = "server")]
fn init_server_state() {
    use api::config::{load_dotenv, AppConfig};
    use api::state::AppState;
    use std::sync::Arc;

    load_dotenv();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("startup: invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    log_runtime_config(&config);

    let state = match AppState::from_config(config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("startup: failed to build app state: {e:#}");
            std::process::exit(1);
        }
    };

    if let Err(e) = AppState::set_global(Arc::new(state)) {
        eprintln!("startup: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(feature = "server")]
fn log_runtime_config(config: &api::config::AppConfig) {
    let ip = std::env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    eprintln!("startup: IP={ip} PORT={port}");
    eprintln!("{}", relay_summary(config));
    if let Some((key, secret)) = config.relay.secret() {
        eprintln!("startup: {key}={}", redact_secret(secret));
    }
}

#[cfg(any(feature = "server", test))]
fn relay_summary(config: &api::config::AppConfig) -> String {
    format!(
        "startup: APP_MODE={:?} RELAY={}",
        config.mode,
        config.relay.kind()
    )
}

#[cfg(any(feature = "server", test))]
fn redact_secret(value: &str) -> String {
    let visible: String = value.chars().take(3).collect();
    if value.chars().count() <= 3 {
        return "***".to_string();
    }
    format!("{visible}***")
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::Theme {}
        ui::I18nProvider {
            ui::ViewRouterProvider {
                ui::ScrollProvider {
                    div { class: "app_shell",
                        ui::Navbar {}
                        main { class: "app_main", ViewSwitch {} }
                        ui::Footer {}
                        div { class: "grain" }
                    }
                }
            }
        }
    }
}

/// Renders exactly the current view.
#[component]
fn ViewSwitch() -> Element {
    let router = ui::use_view_router();

    match router.current() {
        View::Home => rsx! { Home {} },
        View::Mentions => rsx! { Mentions {} },
        View::Cgv => rsx! { Cgv {} },
        View::Demo => rsx! { Demo {} },
    }
}
