//! Root application module.
//!
//! Contains the main App component: page chrome around the file browser,
//! plus the optional periodic reload.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use log::info;

use crate::components::FileBrowser;
use crate::config::{APP_NAME, APP_VERSION, BrowserConfig, SourceMode};

stylance::import_crate_style!(css, "src/app.module.css");

/// Root application component.
///
/// Takes the startup configuration by value; nothing reads it from a global.
/// When `refresh_minutes` is set, a timer bumps the reload signal so the
/// browser fetches again. Ticks are not guarded against a slow load still
/// running.
#[component]
pub fn App(config: BrowserConfig) -> impl IntoView {
    let reload = RwSignal::new(0u32);

    if let Some(every) = config.refresh_interval() {
        info!("Reloading listing every {}s", every.as_secs());
        let millis = u32::try_from(every.as_millis()).unwrap_or(u32::MAX);
        Interval::new(millis, move || reload.update(|n| *n = n.wrapping_add(1))).forget();
    }

    let source_label = match config.mode {
        SourceMode::Remote => {
            format!("{}/{} · {}/", config.owner, config.repo, config.folder)
        }
        SourceMode::Manual => format!("{}/", config.folder),
    };

    view! {
        <div class=css::app>
            <header class=css::header>
                <h1 class=css::title>{APP_NAME}</h1>
                <span class=css::source>{source_label}</span>
            </header>

            <main class=css::main>
                <FileBrowser config=config reload=reload />
            </main>

            <footer class=css::footer>{format!("{} v{}", APP_NAME, APP_VERSION)}</footer>
        </div>
    }
}
