//! Status Badge Component

use leptos::prelude::*;

/// Badge showing the estado verbatim, with the lowercased estado as the
/// style hook (`badge disponible`, `badge vendido`, `badge reservado`, ...)
#[component]
pub fn StatusBadge(estado: String) -> impl IntoView {
    let class = format!("badge {}", estado.to_lowercase());

    view! {
        <span class=class>{estado}</span>
    }
}
