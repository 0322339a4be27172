use crate::{
    layout::hex::{CellAddress, Side},
    render::LayoutRenderer,
    Layout,
};
use std::f64::consts::FRAC_PI_3;
use svg::{
    node::{
        element::{Circle, Group, Line, Polygon},
        Comment,
    },
    Document,
};

/// Render one layer of a layout as an SVG floor plan. This is a 2D top-down
/// view: hexagon outlines per cell, wall markers colored by kind, optional
/// vestibule markers outside the walls.
pub(super) fn layout_to_svg(
    layout: &Layout,
    renderer: &LayoutRenderer,
) -> Document {
    let config = layout.config();
    let layer = renderer.render_config().layer;
    let vertex_radius =
        config.radius.0 * LayoutRenderer::VERTEX_RADIUS_RATIO;

    // Fit the view box to the generated grid. x grows with (b - a) and z
    // with (a + b), so just scan all the cell centers
    let mut min = (f64::INFINITY, f64::INFINITY);
    let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for a in config.a_range.iter() {
        for b in config.b_range.iter() {
            let pos = renderer
                .cell_position(layout, CellAddress::new(a, b, layer));
            min = (min.0.min(pos.x), min.1.min(pos.y));
            max = (max.0.max(pos.x), max.1.max(pos.y));
        }
    }

    let mut document = Document::new()
        .set(
            "viewBox",
            (
                min.0 - vertex_radius,
                min.1 - vertex_radius,
                (max.0 - min.0) + vertex_radius * 2.0,
                (max.1 - min.1) + vertex_radius * 2.0,
            ),
        )
        .add(Comment::new(format!("\n{config:#?}\n")));

    for a in config.a_range.iter() {
        for b in config.b_range.iter() {
            let cell =
                draw_cell(layout, renderer, CellAddress::new(a, b, layer));
            document = document.add(cell);
        }
    }

    document
}

/// Generate the SVG group for a single cell: the hexagon outline plus
/// per-side markers.
fn draw_cell(
    layout: &Layout,
    renderer: &LayoutRenderer,
    address: CellAddress,
) -> Group {
    let config = layout.config();
    let pos = renderer.cell_position(layout, address);
    let vertex_radius =
        config.radius.0 * LayoutRenderer::VERTEX_RADIUS_RATIO;

    // Hexagon corners sit at multiples of 60°, halfway between the side
    // directions
    let corners: Vec<(f64, f64)> = (0..Side::COUNT)
        .map(|k| {
            let angle = k as f64 * FRAC_PI_3;
            (vertex_radius * angle.cos(), vertex_radius * angle.sin())
        })
        .collect();

    let mut group = Group::new()
        // Translate the cell to its correct position
        .set("transform", format!("translate({} {})", pos.x, pos.y))
        .add(Comment::new(address.to_string())) // Readability!
        .add(
            Polygon::new()
                .set("points", corners)
                .set("fill", renderer.cell_color().to_html())
                .set("stroke", "#404040")
                .set("stroke-width", 1),
        );

    for side in Side::ALL {
        // Wall marker: a ray from the cell center to where the wall segment
        // actually sits, colored by kind
        let kind = config.walls.get(address.a, address.b, side);
        let dir = side.direction();
        let wall_reach = (config.radius - config.wall_inset).0;
        group = group.add(
            Line::new()
                .set("x1", 0)
                .set("y1", 0)
                .set("x2", dir.x * wall_reach)
                .set("y2", dir.z * wall_reach)
                .set("stroke", renderer.wall_color(kind).to_html())
                .set("stroke-width", 3),
        );

        if renderer.render_config().show_vestibules {
            if let Some(kind) =
                config.vestibules.get(address.a, address.b, side)
            {
                group = group.add(
                    Circle::new()
                        .set("cx", dir.x * config.radius.0)
                        .set("cy", dir.z * config.radius.0)
                        .set("r", config.radius.0 * 0.12)
                        .set(
                            "fill",
                            renderer.vestibule_color(kind).to_html(),
                        ),
                );
            }
        }
    }

    group
}
