use super::*;
use crate::types::*;

fn base_params() -> LayoutParams {
    LayoutParams {
        sheet_width: 100.0,
        sheet_height: 70.0,
        piece_width: 9.0,
        piece_height: 5.0,
        margin: 0.5,
        gutter: 0.3,
        rotate: false,
        gripper_margin: 2.0,
    }
}

fn base_pricing() -> PricingInputs {
    PricingInputs {
        paper: OperationalPaper {
            price_per_sheet: Some(2.0),
            entered_sheets: Some(120),
            ..Default::default()
        },
        finishing: vec![FinishingLineItem {
            name: "UV Spot".to_string(),
            cost: Some(50.0),
        }],
        margin_percentage: 15.0,
        discount: None,
    }
}

#[test]
fn packs_business_cards_on_a_press_sheet() {
    // usable 99 x 67 cm, pitch 9.3 x 5.3
    let result = compute_layout(&base_params());

    assert_eq!(result.across, 10);
    assert_eq!(result.down, 12);
    assert_eq!(result.per_sheet, 120);
}

#[test]
fn rotation_improves_yield_for_this_sheet() {
    let params = LayoutParams {
        rotate: true,
        ..base_params()
    };
    let result = compute_layout(&params);

    assert_eq!(result.across, 18);
    assert_eq!(result.down, 7);
    assert_eq!(result.per_sheet, 126);
}

#[test]
fn rotation_equals_swapped_piece_dimensions() {
    let rotated = compute_layout(&LayoutParams {
        rotate: true,
        ..base_params()
    });
    let swapped = compute_layout(&LayoutParams {
        piece_width: 5.0,
        piece_height: 9.0,
        rotate: false,
        ..base_params()
    });

    assert_eq!(rotated, swapped);
}

#[test]
fn oversized_piece_yields_zero_not_error() {
    let params = LayoutParams {
        sheet_width: 10.0,
        sheet_height: 10.0,
        piece_width: 20.0,
        piece_height: 20.0,
        margin: 0.0,
        gutter: 0.0,
        rotate: false,
        gripper_margin: 0.0,
    };
    let result = compute_layout(&params);

    assert_eq!(result.across, 0);
    assert_eq!(result.down, 0);
    assert_eq!(result.per_sheet, 0);
    assert_eq!(result.used_area_percent, 0.0);
}

#[test]
fn malformed_dimensions_are_coerced_to_zero() {
    let params = LayoutParams {
        sheet_width: f64::NAN,
        sheet_height: -70.0,
        piece_width: f64::INFINITY,
        piece_height: 5.0,
        margin: -1.0,
        gutter: f64::NAN,
        rotate: false,
        gripper_margin: f64::NEG_INFINITY,
    };
    let result = compute_layout(&params);

    assert_eq!(result.per_sheet, 0);
    assert_eq!(result.used_area_percent, 0.0);
}

#[test]
fn layout_is_deterministic() {
    let first = compute_layout(&base_params());
    let second = compute_layout(&base_params());
    assert_eq!(first, second);
}

#[test]
fn wider_gutter_never_increases_yield() {
    let mut previous = u32::MAX;
    for tenths in 0..=30 {
        let params = LayoutParams {
            gutter: tenths as f64 / 10.0,
            ..base_params()
        };
        let per_sheet = compute_layout(&params).per_sheet;
        assert!(per_sheet <= previous, "yield grew when gutter widened");
        previous = per_sheet;
    }
}

#[test]
fn per_sheet_is_product_of_counts() {
    for piece_w in [3.0, 5.5, 9.0, 21.0] {
        for piece_h in [2.0, 5.0, 14.8] {
            let params = LayoutParams {
                piece_width: piece_w,
                piece_height: piece_h,
                ..base_params()
            };
            let result = compute_layout(&params);
            assert_eq!(result.per_sheet, result.across * result.down);
        }
    }
}

#[test]
fn utilization_is_one_decimal_and_bounded() {
    let result = compute_layout(&base_params());
    // 120 * 45 cm2 over 99 * 67 cm2
    assert_eq!(result.used_area_percent, 81.4);
    assert!(result.used_area_percent <= 100.0);
}

#[test]
fn placements_match_yield_and_stay_on_sheet() {
    let params = base_params();
    let result = compute_layout(&params);
    let placements = grid_placements(&params, &result);

    assert_eq!(placements.len(), result.per_sheet as usize);
    for p in &placements {
        assert!(p.x >= params.margin - 1e-9);
        assert!(p.y >= params.margin + params.gripper_margin - 1e-9);
        assert!(p.x + p.width <= params.sheet_width - params.margin + 1e-9);
        assert!(p.y + p.height <= params.sheet_height - params.margin + 1e-9);
    }
}

#[test]
fn placements_empty_when_nothing_fits() {
    let params = LayoutParams {
        piece_width: 500.0,
        ..base_params()
    };
    let result = compute_layout(&params);
    assert!(grid_placements(&params, &result).is_empty());
}

#[test]
fn prices_a_business_card_run() {
    let result = compute_pricing(&base_pricing());

    assert_eq!(result.paper_cost, 240.0);
    assert_eq!(result.finishing_cost, 50.0);
    assert_eq!(result.base_before_margin, 290.0);
    assert_eq!(result.margin_amount, 43.5);
    assert_eq!(result.subtotal, 333.5);
    assert_eq!(result.discount_amount, 0.0);
    assert_eq!(result.final_subtotal, 333.5);
    assert!((result.vat_amount - 16.675).abs() < 1e-9);
    assert!((result.total_price - 350.175).abs() < 1e-9);
}

#[test]
fn discount_is_capped_at_subtotal() {
    let inputs = PricingInputs {
        discount: Some(Discount {
            applied: true,
            percentage: 0.0,
            amount: 500.0,
        }),
        ..base_pricing()
    };
    let result = compute_pricing(&inputs);

    assert_eq!(result.discount_amount, 333.5);
    assert_eq!(result.final_subtotal, 0.0);
    assert_eq!(result.vat_amount, 0.0);
    assert_eq!(result.total_price, 0.0);
}

#[test]
fn discount_amount_beats_percentage() {
    let inputs = PricingInputs {
        discount: Some(Discount {
            applied: true,
            percentage: 90.0,
            amount: 10.0,
        }),
        ..base_pricing()
    };
    let result = compute_pricing(&inputs);

    assert_eq!(result.discount_amount, 10.0);
}

#[test]
fn unapplied_discount_is_ignored() {
    let inputs = PricingInputs {
        discount: Some(Discount {
            applied: false,
            percentage: 50.0,
            amount: 100.0,
        }),
        ..base_pricing()
    };
    let result = compute_pricing(&inputs);

    assert_eq!(result.discount_amount, 0.0);
    assert_eq!(result.final_subtotal, result.subtotal);
}

#[test]
fn percentage_discount_applies_to_subtotal() {
    let inputs = PricingInputs {
        discount: Some(Discount {
            applied: true,
            percentage: 10.0,
            amount: 0.0,
        }),
        ..base_pricing()
    };
    let result = compute_pricing(&inputs);

    assert!((result.discount_amount - 33.35).abs() < 1e-9);
    assert!((result.total_price - result.final_subtotal * 1.05).abs() < 1e-9);
}

#[test]
fn entered_sheets_win_over_recommendation() {
    let mut inputs = base_pricing();
    inputs.paper.entered_sheets = Some(100);
    inputs.paper.recommended_sheets = 120;
    assert_eq!(compute_pricing(&inputs).paper_cost, 200.0);

    inputs.paper.entered_sheets = None;
    assert_eq!(compute_pricing(&inputs).paper_cost, 240.0);

    // Zero entered sheets counts as unset
    inputs.paper.entered_sheets = Some(0);
    assert_eq!(compute_pricing(&inputs).paper_cost, 240.0);
}

#[test]
fn missing_costs_are_treated_as_zero() {
    let inputs = PricingInputs {
        paper: OperationalPaper::default(),
        finishing: vec![
            FinishingLineItem {
                name: "Folding".to_string(),
                cost: None,
            },
            FinishingLineItem {
                name: "Foiling".to_string(),
                cost: Some(f64::NAN),
            },
        ],
        margin_percentage: f64::NAN,
        discount: None,
    };
    let result = compute_pricing(&inputs);

    assert_eq!(result.total_price, 0.0);
}

#[test]
fn recommended_sheets_rounds_up() {
    assert_eq!(recommended_sheets(1000, 120), 9);
    assert_eq!(recommended_sheets(1200, 120), 10);
    assert_eq!(recommended_sheets(1, 120), 1);
    assert_eq!(recommended_sheets(0, 120), 0);
    // Nothing fits: fall back to the raw quantity
    assert_eq!(recommended_sheets(500, 0), 500);
}

#[test]
fn vat_is_five_percent_of_final_subtotal() {
    let result = compute_pricing(&base_pricing());
    assert!((result.total_price - result.final_subtotal * (1.0 + VAT_RATE)).abs() < 1e-9);
}
