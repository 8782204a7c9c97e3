//! Backend API Bindings
//!
//! HTTP wrappers for the inmobiliaria REST backend.

use gloo_net::http::Request;
use web_sys::AbortSignal;

use crate::models::Lote;

/// Base URL of the backend REST API.
pub const BASE: &str = "http://localhost:8080/api";

/// Fetch the full lote collection.
///
/// Issued once per mount; `signal` lets the caller abort the request when the
/// view is torn down before the response arrives.
pub async fn fetch_lotes(signal: Option<&AbortSignal>) -> Result<Vec<Lote>, String> {
    let response = Request::get(&format!("{}/lotes", BASE))
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response.json::<Vec<Lote>>().await.map_err(|e| e.to_string())
}
