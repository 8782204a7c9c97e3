//! Lote Grid Component

use leptos::prelude::*;

use crate::components::LoteCard;
use crate::models::Lote;

/// Card grid over the filtered collection, keyed by lote id
#[component]
pub fn LoteGrid(lotes: Signal<Vec<Lote>>) -> impl IntoView {
    view! {
        <div class="cards">
            <For
                each=move || lotes.get()
                key=|lote| lote.id_lote
                children=move |lote| {
                    view! { <LoteCard lote=lote /> }
                }
            />
        </div>
    }
}
