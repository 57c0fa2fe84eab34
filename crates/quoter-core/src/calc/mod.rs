//! Sheet layout packing and quote pricing. Both entry points are total,
//! stateless functions: malformed numbers are coerced to zero at the
//! boundary and degenerate geometry packs zero pieces instead of failing,
//! so they are safe to call on every form change.

mod layout;
mod pricing;
#[cfg(test)]
mod tests;

pub use layout::{compute_layout, grid_placements};
pub use pricing::{compute_pricing, recommended_sheets, VAT_RATE};

/// Coerces a user-entered value to a usable dimension or amount.
/// NaN, infinities, and negatives all become 0.
pub(crate) fn coerce(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
