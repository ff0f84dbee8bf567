//! Home Page

use leptos::prelude::*;

use crate::components::ToolCard;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <h1>"Welcome to ToroGold-Ai Web Services"</h1>
            <div class="tools-grid">
                {toro_catalog::tools()
                    .iter()
                    .map(|entry| view! { <ToolCard entry=*entry /> })
                    .collect_view()}
            </div>
        </div>
    }
}
