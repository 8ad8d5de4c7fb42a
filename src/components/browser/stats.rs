//! Statistics bar: file count, total size, last update.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::ListingView;

stylance::import_crate_style!(css, "src/components/browser/stats.module.css");

#[component]
pub fn StatsBar(listing: ListingView) -> impl IntoView {
    view! {
        <div class=css::stats>
            <StatCard id="total-files" icon=ic::FILES label="Files" value=listing.total_files_label() />
            <StatCard id="total-size" icon=ic::STORAGE label="Total size" value=listing.total_size_label() />
            <StatCard id="last-update" icon=ic::UPDATED label="Last update" value=listing.last_update_label() />
        </div>
    }
}

#[component]
fn StatCard(id: &'static str, icon: IconData, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class=css::card>
            <span class=css::cardIcon aria-hidden="true"><Icon icon=icon /></span>
            <div class=css::cardBody>
                <span id=id class=css::value>{value}</span>
                <span class=css::label>{label}</span>
            </div>
        </div>
    }
}
