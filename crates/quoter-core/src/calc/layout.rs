use super::coerce;
use crate::types::{LayoutParams, LayoutResult, Placement};

/// Packs identical rectangular pieces onto a press sheet in a grid and
/// reports the yield and sheet utilization.
///
/// The gripper margin is reserved at the top edge only, in addition to
/// the normal margin. A piece larger than the usable area yields zero
/// pieces, not an error.
pub fn compute_layout(params: &LayoutParams) -> LayoutResult {
    let (piece_w, piece_h) = effective_piece(params);
    let margin = coerce(params.margin);
    let gutter = coerce(params.gutter);
    let gripper = coerce(params.gripper_margin);

    let usable_width = coerce(params.sheet_width) - margin * 2.0;
    let usable_height = coerce(params.sheet_height) - margin - gripper - margin;

    let across = fit_count(usable_width, piece_w, gutter);
    let down = fit_count(usable_height, piece_h, gutter);
    let per_sheet = across * down;

    let usable_area = usable_width * usable_height;
    let used_area_percent = if usable_area > 0.0 && per_sheet > 0 {
        let used = per_sheet as f64 * piece_w * piece_h;
        (used / usable_area * 1000.0).round() / 10.0
    } else {
        0.0
    };

    LayoutResult {
        across,
        down,
        per_sheet,
        used_area_percent,
    }
}

/// Piece positions for the layout, centered within the usable area the
/// way the press lays them down. Coordinates are cm from the sheet's
/// top-left corner; rows start below the gripper reservation.
pub fn grid_placements(params: &LayoutParams, layout: &LayoutResult) -> Vec<Placement> {
    if layout.per_sheet == 0 {
        return Vec::new();
    }

    let (piece_w, piece_h) = effective_piece(params);
    let margin = coerce(params.margin);
    let gutter = coerce(params.gutter);
    let gripper = coerce(params.gripper_margin);

    let usable_width = coerce(params.sheet_width) - margin * 2.0;
    let usable_height = coerce(params.sheet_height) - margin - gripper - margin;

    let across = layout.across as f64;
    let down = layout.down as f64;
    let grid_w = across * piece_w + (across - 1.0) * gutter;
    let grid_h = down * piece_h + (down - 1.0) * gutter;

    let start_x = margin + (usable_width - grid_w) / 2.0;
    let start_y = margin + gripper + (usable_height - grid_h) / 2.0;

    let mut placements = Vec::with_capacity(layout.per_sheet as usize);
    for row in 0..layout.down {
        for col in 0..layout.across {
            placements.push(Placement {
                x: start_x + col as f64 * (piece_w + gutter),
                y: start_y + row as f64 * (piece_h + gutter),
                width: piece_w,
                height: piece_h,
                rotated: params.rotate,
            });
        }
    }
    placements
}

fn effective_piece(params: &LayoutParams) -> (f64, f64) {
    let w = coerce(params.piece_width);
    let h = coerce(params.piece_height);
    if params.rotate {
        (h, w)
    } else {
        (w, h)
    }
}

/// Largest n with n * (piece + gutter) - gutter <= usable. N pieces only
/// need N - 1 internal gutters, hence the +gutter inside the division.
fn fit_count(usable: f64, piece: f64, gutter: f64) -> u32 {
    let pitch = piece + gutter;
    if pitch <= 0.0 {
        return 0;
    }
    let count = ((usable + gutter) / pitch).floor();
    if count.is_finite() && count > 0.0 {
        count as u32
    } else {
        0
    }
}
