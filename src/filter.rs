//! Filter Utilities
//!
//! Pure predicates over the loaded lote collection.

use crate::models::Lote;

/// Derive the visible collection from the loaded lotes and the two filter
/// inputs. Order-preserving: the output is a subsequence of the input.
///
/// A lote passes when `referencia` or `municipio` contains `search`
/// case-insensitively (empty `search` passes everything), and when
/// `estado_filtro` is empty or equals `estado` exactly.
pub fn filter_lotes(lotes: &[Lote], search: &str, estado_filtro: &str) -> Vec<Lote> {
    let q = search.to_lowercase();
    lotes
        .iter()
        .filter(|l| {
            (l.referencia.to_lowercase().contains(&q)
                || l.municipio.to_lowercase().contains(&q))
                && (estado_filtro.is_empty() || l.estado == estado_filtro)
        })
        .cloned()
        .collect()
}
