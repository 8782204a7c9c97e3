//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Lote data structure (matches the backend `lotes` wire shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lote {
    pub id_lote: u32,
    pub referencia: String,
    pub municipio: String,
    #[serde(default)]
    pub area_m2: f64,
    pub precio: Option<f64>,
    /// Open set: the backend conventionally sends Disponible/Vendido/Reservado,
    /// but any string is accepted and displayed verbatim.
    pub estado: String,
    /// Present on the wire but unused: the card image is derived from `id_lote`.
    pub imagen_url: Option<String>,
    pub descripcion: Option<String>,
}

/// Lifecycle of the one-shot collection fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed,
}
