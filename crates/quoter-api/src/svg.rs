//! SVG imposition preview: sheet outline, margin frame, gripper band,
//! and the centered piece grid, with a yield caption.

use std::fmt::Write;

use quoter_core::{compute_layout, grid_placements, LayoutParams, LayoutResult};

const PX_PER_CM: f64 = 8.0;
const CANVAS_MARGIN: f64 = 20.0;

pub fn render(params: &LayoutParams) -> String {
    let layout = compute_layout(params);
    let placements = grid_placements(params, &layout);

    let sheet_w = params.sheet_width.max(0.0) * PX_PER_CM;
    let sheet_h = params.sheet_height.max(0.0) * PX_PER_CM;
    let svg_width = sheet_w + 2.0 * CANVAS_MARGIN;
    let svg_height = sheet_h + 2.0 * CANVAS_MARGIN + 20.0;

    let mut svg = String::new();
    writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
    writeln!(
        &mut svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        svg_width, svg_height, svg_width, svg_height
    )
    .unwrap();
    writeln!(
        &mut svg,
        r##"  <rect width="100%" height="100%" fill="#f5f5f5"/>"##
    )
    .unwrap();

    // Sheet outline
    writeln!(
        &mut svg,
        r##"  <rect x="{}" y="{}" width="{}" height="{}" fill="#ffffff" stroke="#333" stroke-width="2"/>"##,
        CANVAS_MARGIN, CANVAS_MARGIN, sheet_w, sheet_h
    )
    .unwrap();

    // Printable area inside the margins
    let margin_px = params.margin.max(0.0) * PX_PER_CM;
    let gripper_px = params.gripper_margin.max(0.0) * PX_PER_CM;
    let inner_w = (sheet_w - 2.0 * margin_px).max(0.0);
    let inner_h = (sheet_h - 2.0 * margin_px - gripper_px).max(0.0);
    writeln!(
        &mut svg,
        r##"  <rect x="{}" y="{}" width="{}" height="{}" fill="#f0f0f0"/>"##,
        CANVAS_MARGIN + margin_px,
        CANVAS_MARGIN + margin_px + gripper_px,
        inner_w,
        inner_h
    )
    .unwrap();

    // Gripper band along the top edge
    if gripper_px > 0.0 {
        writeln!(
            &mut svg,
            r##"  <rect x="{}" y="{}" width="{}" height="{}" fill="#fde68a" opacity="0.8"/>"##,
            CANVAS_MARGIN + margin_px,
            CANVAS_MARGIN + margin_px,
            inner_w,
            gripper_px
        )
        .unwrap();
    }

    for placement in &placements {
        writeln!(
            &mut svg,
            r##"  <rect x="{}" y="{}" width="{}" height="{}" fill="#1e293b" stroke="#0f172a" stroke-width="1" opacity="0.85"/>"##,
            CANVAS_MARGIN + placement.x * PX_PER_CM,
            CANVAS_MARGIN + placement.y * PX_PER_CM,
            placement.width * PX_PER_CM,
            placement.height * PX_PER_CM
        )
        .unwrap();
    }

    write_caption(&mut svg, &layout, svg_height);
    writeln!(&mut svg, "</svg>").unwrap();
    svg
}

fn write_caption(svg: &mut String, layout: &LayoutResult, svg_height: f64) {
    writeln!(
        svg,
        r##"  <text x="{}" y="{}" font-family="Arial" font-size="12" fill="#666">{} across x {} down = {} per sheet | {:.1}% used</text>"##,
        CANVAS_MARGIN,
        svg_height - 8.0,
        layout.across,
        layout.down,
        layout.per_sheet,
        layout.used_area_percent
    )
    .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> LayoutParams {
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

    #[test]
    fn preview_contains_every_piece() {
        let svg = render(&params());
        // 120 pieces + sheet + printable + gripper + background rects
        assert_eq!(svg.matches("<rect").count(), 124);
        assert!(svg.contains("120 per sheet"));
    }

    #[test]
    fn degenerate_layout_still_renders() {
        let svg = render(&LayoutParams {
            piece_width: 500.0,
            ..params()
        });
        assert!(svg.contains("0 per sheet"));
        assert!(svg.ends_with("</svg>\n"));
    }
}
