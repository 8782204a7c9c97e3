//! Filter Bar Component
//!
//! Free-text search plus estado selector. Both write synchronously into the
//! filter signals owned by the app.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Estado options offered by the selector, in display order
const ESTADOS: &[&str] = &["Disponible", "Vendido", "Reservado"];

#[component]
pub fn FilterBar(
    search: ReadSignal<String>,
    set_search: WriteSignal<String>,
    estado_filtro: ReadSignal<String>,
    set_estado_filtro: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="filters">
            <input
                type="text"
                placeholder="Buscar por referencia o municipio..."
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />

            <select
                prop:value=move || estado_filtro.get()
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                    set_estado_filtro.set(select.value());
                }
            >
                <option value="">"Todos los estados"</option>
                {ESTADOS.iter().map(|estado| {
                    let estado = *estado;
                    view! {
                        <option value=estado>{estado}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
