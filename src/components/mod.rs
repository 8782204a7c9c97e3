//! UI Components
//!
//! Reusable Leptos components.

mod filter_bar;
mod lote_card;
mod lote_grid;
mod status_badge;

pub use filter_bar::FilterBar;
pub use lote_card::LoteCard;
pub use lote_grid::LoteGrid;
pub use status_badge::StatusBadge;
