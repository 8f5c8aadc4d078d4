//! Tab Bar Component
//!
//! Bottom navigation between the four panels.

use leptos::prelude::*;

use crate::models::Tab;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TabBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="tab-bar">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let tab_class = move || {
                        if store.active_tab().get() == tab { "tab-btn active" } else { "tab-btn" }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| store.active_tab().set(tab)>
                            <span class="tab-icon">{tab.icon()}</span>
                            <span class="tab-label">{tab.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
