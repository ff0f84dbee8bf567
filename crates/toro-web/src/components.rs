//! UI Components

use leptos::prelude::*;

use toro_catalog::ToolEntry;

/// Static branding header shown above every page
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="logo">
                <span role="img" aria-label="toro">"🐂"</span>
                <span class="logo-text">"ToroGold-Ai Web Services"</span>
            </div>
        </nav>
    }
}

/// One navigable catalog card
#[component]
pub fn ToolCard(entry: ToolEntry) -> impl IntoView {
    view! {
        <a href=entry.href() class="tool-card">
            <h2>{entry.name}</h2>
            <p>{entry.desc}</p>
        </a>
    }
}
