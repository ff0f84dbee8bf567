//! Tool Detail Page

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Placeholder page for a single tool, resolved from the `:tool_id`
/// route parameter. An unrecognized identifier renders the generic
/// "Tool" heading rather than an error.
#[component]
pub fn ToolPage() -> impl IntoView {
    let params = use_params_map();
    let name = move || {
        params.with(|p| toro_catalog::display_name(&p.get("tool_id").unwrap_or_default()))
    };

    view! {
        <div class="tool">
            <h1>{name}</h1>
            <p>{move || format!("This is a placeholder for the {} tool.", name())}</p>
            <a href="/">"← Back to Home"</a>
        </div>
    }
}
