//! Inmobiliaria Frontend App
//!
//! Main application component: loads the lote collection once and filters it
//! locally by free text and estado.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{FilterBar, LoteGrid};
use crate::filter::filter_lotes;
use crate::models::{LoadState, Lote};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (lotes, set_lotes) = signal(Vec::<Lote>::new());
    let (search, set_search) = signal(String::new());
    let (estado_filtro, set_estado_filtro) = signal(String::new());
    let (load_state, set_load_state) = signal(LoadState::Idle);

    // One abort handle per mount so teardown cancels an in-flight fetch
    let controller = StoredValue::new_local(web_sys::AbortController::new().ok());

    // Load lotes on mount. No tracked dependencies: runs exactly once,
    // filter input changes never re-trigger it.
    Effect::new(move |_| {
        set_load_state.set(LoadState::Loading);
        let abort = controller.with_value(|c| c.as_ref().map(|c| c.signal()));
        spawn_local(async move {
            // try_set: the component may have been torn down (and the fetch
            // aborted) while this task was suspended
            match api::fetch_lotes(abort.as_ref()).await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} lotes", loaded.len()).into());
                    set_lotes.try_set(loaded);
                    set_load_state.try_set(LoadState::Loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Error loading lotes: {}", e).into());
                    set_load_state.try_set(LoadState::Failed);
                }
            }
        });
    });

    on_cleanup(move || {
        controller.with_value(|c| {
            if let Some(c) = c {
                c.abort();
            }
        });
    });

    let filtered = Signal::derive(move || {
        filter_lotes(&lotes.get(), &search.get(), &estado_filtro.get())
    });

    view! {
        <div class="container">
            <h1 class="title">"ATLAS Inmobiliaria"</h1>

            <FilterBar
                search=search
                set_search=set_search
                estado_filtro=estado_filtro
                set_estado_filtro=set_estado_filtro
            />

            <Show when=move || load_state.get() == LoadState::Loading>
                <div class="loading">"Cargando lotes..."</div>
            </Show>

            <LoteGrid lotes=filtered />
        </div>
    }
}
