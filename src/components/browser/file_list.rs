//! File list component.
//!
//! Rows come pre-formatted from [`crate::core::ListingView`]; this module
//! only lays them out.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::FileRow;

stylance::import_crate_style!(css, "src/components/browser/file_list.module.css");

#[component]
pub fn FileList(rows: Vec<FileRow>, folder: String) -> impl IntoView {
    if rows.is_empty() {
        return view! { <EmptyState folder=folder /> }.into_any();
    }

    view! {
        <div id="files-container" class=css::list role="table" aria-label="Files">
            // Column header (desktop only, hidden on mobile via CSS)
            <div class=css::listHeader role="row">
                <span class=css::headerName>"Name"</span>
                <span class=css::headerSize>"Size"</span>
                <span class=css::headerDate>"Modified"</span>
                <span class=css::headerAction></span>
            </div>
            {rows
                .into_iter()
                .map(|row| view! { <FileListItem row=row /> })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn FileListItem(row: FileRow) -> impl IntoView {
    let title = format!("Download {}", row.name);

    view! {
        <div class=css::listItem role="row">
            <div class=css::nameWrapper>
                <span class=css::icon aria-hidden="true">{row.icon}</span>
                <div class=css::info>
                    <strong class=css::name>{row.name}</strong>
                    <small class=css::fileType>{row.file_type}</small>
                </div>
            </div>
            <span class=css::size>{row.size}</span>
            <span class=css::date>{row.date}</span>
            <a class=css::downloadButton href=row.download_url download="" title=title>
                <Icon icon=ic::DOWNLOAD />
                <span>"Download"</span>
            </a>
        </div>
    }
}

/// Shown instead of the list when there is nothing to download.
///
/// Also covers a failed load; the console log tells the two apart.
#[component]
fn EmptyState(folder: String) -> impl IntoView {
    view! {
        <div id="files-container" class=css::emptyState>
            <span class=css::emptyIcon aria-hidden="true"><Icon icon=ic::EMPTY_FOLDER /></span>
            <p>"No files available right now"</p>
            <small class=css::emptyHint>
                "Upload files to the " <strong>{format!("{}/", folder)}</strong>
                " folder to see them here"
            </small>
        </div>
    }
}
