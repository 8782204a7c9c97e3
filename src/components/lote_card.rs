//! Lote Card Component
//!
//! One card per lote: photo, referencia, municipio, descripcion, area, precio
//! and estado badge.

use leptos::prelude::*;

use crate::components::StatusBadge;
use crate::format::{descripcion_or_fallback, format_precio, lote_image_path};
use crate::models::Lote;

#[component]
pub fn LoteCard(lote: Lote) -> impl IntoView {
    let descripcion = descripcion_or_fallback(&lote.descripcion).to_string();

    view! {
        <div class="card">
            // Image path comes from the id, not from imagen_url
            <img src={lote_image_path(lote.id_lote)} alt="propiedad" />
            <div class="card-body">
                <h3>{lote.referencia.clone()}</h3>
                <p class="municipio">{lote.municipio.clone()}</p>
                <p>{descripcion}</p>
                <p>
                    <strong>"Área: "</strong>
                    {lote.area_m2}
                    " m²"
                </p>
                <p class="precio">{format_precio(lote.precio)}</p>
                <StatusBadge estado=lote.estado.clone() />
            </div>
        </div>
    }
}
