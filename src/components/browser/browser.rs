//! Main browser component.
//!
//! Owns the listing resource. Each run of the resource performs at most one
//! fetch and yields a fresh [`ListingView`], which replaces the rendered list
//! and statistics as a whole.

use chrono::Local;
use leptos::prelude::*;

use super::{FileList, StatsBar};
use crate::config::BrowserConfig;
use crate::core::{GitHubContents, ListingView, load_files};

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// File browser view component.
///
/// `reload` is tracked by the resource; bumping it loads the listing again.
#[component]
pub fn FileBrowser(config: BrowserConfig, reload: RwSignal<u32>) -> impl IntoView {
    let folder = config.folder.clone();

    let listing = LocalResource::new(move || {
        reload.track();
        let config = config.clone();

        async move {
            let today = Local::now().date_naive();
            let source = GitHubContents::from_config(&config);
            let files = load_files(&config, &source, today).await;
            ListingView::build(&files, today)
        }
    });

    view! {
        <section class=css::browser>
            <Suspense fallback=move || view! {
                <StatsBar listing=ListingView::default() />
                <div class=css::loading>"Loading files..."</div>
            }>
                {move || {
                    let folder = folder.clone();
                    listing.get().map(move |listing| {
                        let rows = listing.rows.clone();
                        view! {
                            <StatsBar listing=listing />
                            <FileList rows=rows folder=folder />
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}
