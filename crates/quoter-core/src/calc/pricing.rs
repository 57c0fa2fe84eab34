use super::coerce;
use crate::types::{PricingInputs, PricingResult};

/// Fixed UAE VAT rate applied to the discounted subtotal.
pub const VAT_RATE: f64 = 0.05;

/// Sheets needed to produce `quantity` pieces at `per_sheet` pieces each.
/// Falls back to the raw quantity when nothing fits on a sheet.
pub fn recommended_sheets(quantity: u32, per_sheet: u32) -> u32 {
    if per_sheet > 0 {
        quantity.div_ceil(per_sheet)
    } else {
        quantity
    }
}

/// Rolls paper and finishing costs up through margin, discount, and VAT.
///
/// Step order is fixed: paper, finishing, base, margin, subtotal,
/// discount, final subtotal, VAT, total. A discount amount takes
/// priority over its percentage when both are set, and the resolved
/// discount is capped at the subtotal so the final price never goes
/// negative.
pub fn compute_pricing(inputs: &PricingInputs) -> PricingResult {
    let paper = &inputs.paper;

    let price_per_sheet = coerce(paper.price_per_sheet.unwrap_or(0.0));
    let sheets = match paper.entered_sheets {
        Some(entered) if entered > 0 => entered,
        _ => paper.recommended_sheets,
    };
    let paper_cost = price_per_sheet * sheets as f64;

    let finishing_cost: f64 = inputs
        .finishing
        .iter()
        .map(|item| coerce(item.cost.unwrap_or(0.0)))
        .sum();

    let base_before_margin = paper_cost + finishing_cost;
    let margin_amount = base_before_margin * (coerce(inputs.margin_percentage) / 100.0);
    let subtotal = base_before_margin + margin_amount;

    let raw_discount = match &inputs.discount {
        Some(discount) if discount.applied => {
            let amount = coerce(discount.amount);
            if amount > 0.0 {
                amount
            } else {
                subtotal * (coerce(discount.percentage) / 100.0)
            }
        }
        _ => 0.0,
    };
    let discount_amount = raw_discount.min(subtotal);
    let final_subtotal = subtotal - discount_amount;

    let vat_amount = final_subtotal * VAT_RATE;
    let total_price = final_subtotal + vat_amount;

    PricingResult {
        paper_cost,
        finishing_cost,
        base_before_margin,
        margin_amount,
        subtotal,
        discount_amount,
        final_subtotal,
        vat_amount,
        total_price,
    }
}
