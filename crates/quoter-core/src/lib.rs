//! Print-shop quoting core: sheet layout packing, pricing roll-up, and
//! the five-step quote wizard state those feed.

pub mod calc;
pub mod catalog;
pub mod quote;
pub mod types;

pub use calc::{compute_layout, compute_pricing, grid_placements, recommended_sheets, VAT_RATE};
pub use quote::{QuoteForm, QuoteMode, WizardStep};
pub use types::*;
