//! SVG markup of rendered muscle diagrams.

use std::fmt::Write as _;

use gymguide_domain::{ActivationLevel, Diagram, LegendEntry, Property, Shape, Style, VIEW_BOX};

/// Standalone `<svg>` element with the body outline followed by all region shapes.
#[must_use]
pub fn svg(diagram: &Diagram) -> String {
    let (width, height) = VIEW_BOX;
    let mut out = String::new();

    let _ = write!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" class="muscle-diagram muscle-diagram--{}">"#,
        diagram.view.name().to_lowercase()
    );

    out.push_str(r#"<g class="muscle-diagram__outline">"#);
    for shape in diagram.outline {
        write_shape(&mut out, shape, &Style::OUTLINE, &[]);
    }
    out.push_str("</g>");

    out.push_str(r#"<g class="muscle-diagram__regions">"#);
    for shape in &diagram.shapes {
        write_shape(
            &mut out,
            &shape.shape,
            &shape.style,
            &[("id", shape.id), ("data-level", level_id(shape.level))],
        );
    }
    out.push_str("</g>");

    out.push_str("</svg>");
    out
}

/// Small SVG swatch for a legend entry.
#[must_use]
pub fn legend_swatch(entry: &LegendEntry) -> String {
    let mut out = String::new();
    out.push_str(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20" width="20" height="20">"#,
    );
    write_shape(
        &mut out,
        &Shape::Rect {
            x: 2.,
            y: 2.,
            width: 16.,
            height: 16.,
            rx: 3.,
        },
        &entry.style,
        &[("aria-label", entry.label)],
    );
    out.push_str("</svg>");
    out
}

fn write_shape(out: &mut String, shape: &Shape, style: &Style, attributes: &[(&str, &str)]) {
    match shape {
        Shape::Path { d } => {
            let _ = write!(out, r#"<path d="{}""#, escape_xml(d));
        }
        Shape::Ellipse { cx, cy, rx, ry } => {
            let _ = write!(out, r#"<ellipse cx="{cx}" cy="{cy}" rx="{rx}" ry="{ry}""#);
        }
        Shape::Rect {
            x,
            y,
            width,
            height,
            rx,
        } => {
            let _ = write!(
                out,
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" rx="{rx}""#
            );
        }
    }
    for (name, value) in attributes {
        let _ = write!(out, r#" {name}="{}""#, escape_xml(value));
    }
    let _ = write!(
        out,
        r#" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="{}"/>"#,
        style.fill, style.fill_opacity, style.stroke, style.stroke_width
    );
}

fn level_id(level: Option<ActivationLevel>) -> &'static str {
    match level {
        Some(ActivationLevel::Primary) => "primary",
        Some(ActivationLevel::Secondary) => "secondary",
        Some(ActivationLevel::Tertiary) => "tertiary",
        None => "none",
    }
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
