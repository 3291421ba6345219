use crate::config::SheetConfig;
use crate::entities::{Placement, ShapeKind, Sheet};
use crate::io::svg::svg_util::{Color, SvgDrawOptions};
use svg::{Document, Node};
use svg::node::element::{Circle, Group, Rectangle, Text, Title};

/// Draws a nested sheet: the sheet itself, its usable area and every placement.
pub fn sheet_to_svg(
    sheet: &Sheet,
    config: &SheetConfig,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let theme = &options.theme;
    let (width, height) = (config.sheet_width, config.sheet_height);
    let min_dim = f64::min(width, height);
    let padding = 0.05 * min_dim;
    let font_size = 0.025 * min_dim;
    let stroke_width = min_dim * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the left top of the sheet
        let label_content = format!(
            "width: {:.1} | height: {:.1} | efficiency: {:.3}% | {}",
            width,
            height,
            sheet.efficiency() * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let guide_style = |r: Rectangle| {
        r.set("fill", "none")
            .set("stroke", theme.guide_stroke.to_string())
            .set("stroke-width", 0.5 * stroke_width)
            .set("stroke-opacity", "0.5")
            .set(
                "stroke-dasharray",
                format!("{} {}", 2.0 * stroke_width, 2.0 * stroke_width),
            )
    };

    //draw sheet
    let sheet_group = {
        let mut sheet_group = Group::new()
            .set("id", format!("sheet_{}", sheet.index))
            .add(Title::new(format!(
                "sheet {}, {} placements, used area: {:.1}, usable area: {:.1}",
                sheet.index,
                sheet.placements.len(),
                sheet.used_area,
                sheet.usable_area
            )))
            .add(
                Rectangle::new()
                    .set("x", 0.0)
                    .set("y", 0.0)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", theme.sheet_fill.to_string())
                    .set("stroke", "black")
                    .set("stroke-width", 2.0 * stroke_width),
            );
        if options.margin && config.margin > 0.0 {
            sheet_group = sheet_group.add(guide_style(
                Rectangle::new()
                    .set("x", config.margin)
                    .set("y", config.margin)
                    .set("width", config.usable_width())
                    .set("height", config.usable_height()),
            ));
        }
        sheet_group
    };

    //draw placements
    let placements_group = sheet.placements.iter().enumerate().fold(
        Group::new().set("id", "placements"),
        |group, (i, p)| {
            let fill = match p.rotated {
                true => theme.rotated_piece_fill,
                false => theme.piece_fill,
            };
            let mut pl_group = Group::new()
                .set("id", format!("placement_{i}"))
                .add(Title::new(format!(
                    "part: {}, x: {:.1}, y: {:.1}, {:.1} x {:.1}, rotated: {}",
                    p.piece_source_id, p.x, p.y, p.width, p.height, p.rotated
                )))
                .add(shape_element(p, fill, stroke_width));
            if options.bounding_boxes && p.kind == ShapeKind::Circle {
                pl_group = pl_group.add(guide_style(bbox_rectangle(p, 0.0)));
            }
            if options.spacing && config.spacing > 0.0 {
                pl_group = pl_group.add(guide_style(bbox_rectangle(p, config.spacing)));
            }
            if options.labels {
                pl_group = pl_group.add(
                    Text::new(p.piece_source_id.clone())
                        .set("x", p.x + p.width / 2.0)
                        .set("y", p.y + p.height / 2.0)
                        .set("font-size", f64::min(font_size, 0.25 * f64::min(p.width, p.height)))
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                );
            }
            group.add(pl_group)
        },
    );

    Document::new()
        .set(
            "viewBox",
            (
                -padding,
                -padding - font_size,
                width + 2.0 * padding,
                height + 2.0 * padding + font_size,
            ),
        )
        .add(sheet_group)
        .add(placements_group)
        .add(label)
}

/// The rectangle of the placement, extended by `extra` along its trailing edges.
fn bbox_rectangle(p: &Placement, extra: f64) -> Rectangle {
    Rectangle::new()
        .set("x", p.x)
        .set("y", p.y)
        .set("width", p.width + extra)
        .set("height", p.height + extra)
}

/// The outline of the placed part: its rectangle, or the circle inscribed in it.
fn shape_element(p: &Placement, fill: Color, stroke_width: f64) -> Box<dyn Node> {
    match p.kind {
        ShapeKind::Rectangle => Box::new(
            bbox_rectangle(p, 0.0)
                .set("fill", fill.to_string())
                .set("stroke", "black")
                .set("stroke-width", stroke_width),
        ),
        ShapeKind::Circle => Box::new(
            Circle::new()
                .set("cx", p.x + p.width / 2.0)
                .set("cy", p.y + p.height / 2.0)
                .set("r", f64::min(p.width, p.height) / 2.0)
                .set("fill", fill.to_string())
                .set("stroke", "black")
                .set("stroke-width", stroke_width),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PlaceablePiece;
    use crate::nest::nest;

    #[test]
    fn every_placement_is_drawn() {
        let config = SheetConfig::new(1000.0, 600.0).with_margin(10.0).with_spacing(5.0);
        let mut pieces = vec![
            PlaceablePiece::new("panel", 400.0, 300.0),
            PlaceablePiece::new("panel", 400.0, 300.0),
        ];
        pieces.push(PlaceablePiece {
            kind: ShapeKind::Circle,
            ..PlaceablePiece::new("disc", 150.0, 150.0)
        });
        let result = nest(&pieces, &config).unwrap();
        assert_eq!(result.sheet_count(), 1);

        let options = SvgDrawOptions {
            spacing: true,
            bounding_boxes: true,
            ..SvgDrawOptions::default()
        };
        let svg = sheet_to_svg(&result.sheets[0], &config, options, "test").to_string();
        assert_eq!(svg.matches("id=\"placement_").count(), 3);
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(svg.contains("efficiency:"));
        assert!(svg.contains("part: disc"));
    }
}
