//! Drawing assembly
//!
//! Renders every cut group of a design, measures the result and produces the
//! placeholder values a template needs.

use crate::design::BoxDesign;
use crate::error::{DesignError, DesignResult};
use crate::registry::DesignKind;
use crate::render::render_group;
use crate::template::Template;
use cutbox_core::{bounds, drawing_units_to_display, Bounds, UnitConverter, TDPI_SCALE};
use std::collections::BTreeMap;
use tracing::debug;

const MM_PER_INCH: f64 = 25.4;
/// Hairline stroke used by laser cutters for cutting.
const STROKE_WIDTH_MM: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct Drawing {
    kind: DesignKind,
    converter: UnitConverter,
    paths: Vec<String>,
    bounds: Bounds,
    viewport: Bounds,
    dimensions: Vec<(&'static str, i64)>,
}

impl Drawing {
    /// Render `design` and size its canvas as the cut bounds plus `margin`.
    pub fn create(
        design: &dyn BoxDesign,
        converter: UnitConverter,
        margin: i64,
    ) -> DesignResult<Self> {
        let corners = design.corners();
        let mut paths = Vec::new();
        let mut placed = Vec::new();
        for group in design.cut_groups() {
            paths.push(render_group(group, corners)?);
            placed.extend(group.placed_points(corners)?);
        }
        let bounds = bounds(&placed).ok_or_else(|| {
            DesignError::Inconsistent(format!("{} produced no cut paths", design.kind()))
        })?;
        let viewport = bounds.expand(margin);
        debug!(
            design = %design.kind(),
            paths = paths.len(),
            width = bounds.width(),
            height = bounds.height(),
            "assembled drawing"
        );

        Ok(Self {
            kind: design.kind(),
            converter,
            paths,
            bounds,
            viewport,
            dimensions: design.dimensions(),
        })
    }

    pub fn kind(&self) -> DesignKind {
        self.kind
    }

    /// One `<path>` element per cut group.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Extent of the cut lines, without margin.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn viewport(&self) -> Bounds {
        self.viewport
    }

    pub fn viewbox(&self) -> String {
        let v = &self.viewport;
        format!(
            "{} {} {} {}",
            drawing_units_to_display(v.min_x),
            drawing_units_to_display(v.min_y),
            drawing_units_to_display(v.width()),
            drawing_units_to_display(v.height())
        )
    }

    /// Physical canvas size in millimeters, whatever the configured unit.
    pub fn canvas_size_mm(&self) -> (f64, f64) {
        let dots_to_mm = |tdpi: i64| {
            tdpi as f64 / TDPI_SCALE as f64 / f64::from(self.converter.resolution()) * MM_PER_INCH
        };
        (
            dots_to_mm(self.viewport.width()),
            dots_to_mm(self.viewport.height()),
        )
    }

    pub fn placeholders(&self, title: &str) -> BTreeMap<String, String> {
        let (canvas_w, canvas_h) = self.canvas_size_mm();
        let stroke = STROKE_WIDTH_MM * f64::from(self.converter.resolution()) / MM_PER_INCH;
        let mut values = BTreeMap::new();
        values.insert("title".to_string(), escape_xml(title));
        values.insert("design".to_string(), self.kind.tag().to_string());
        values.insert(
            "description".to_string(),
            escape_xml(self.kind.description()),
        );
        values.insert("paths".to_string(), self.paths.join("\n  "));
        values.insert("viewbox".to_string(), self.viewbox());
        values.insert("canvas_width_mm".to_string(), format!("{:.2}", canvas_w));
        values.insert("canvas_height_mm".to_string(), format!("{:.2}", canvas_h));
        values.insert("stroke_width".to_string(), format!("{:.4}", stroke));
        values.insert("unit".to_string(), self.converter.unit().label().to_string());
        values.insert(
            "sheet_width".to_string(),
            self.converter.format_physical(self.bounds.width()),
        );
        values.insert(
            "sheet_height".to_string(),
            self.converter.format_physical(self.bounds.height()),
        );
        for (name, value) in &self.dimensions {
            values.insert(name.to_string(), self.converter.format_physical(*value));
        }
        values
    }

    /// Fill `template` with this drawing.
    pub fn to_svg(&self, template: &Template, title: &str) -> String {
        template.render(&self.placeholders(title))
    }
}

/// Escape text for use in XML character data and attribute values.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_sheet::{CardSheetMaker, CardSheetParameters};

    fn sheet() -> CardSheetMaker {
        let conv = UnitConverter::default();
        CardSheetMaker::new(CardSheetParameters {
            length: conv.to_drawing_units(50.8),
            width: conv.to_drawing_units(25.4),
            rows: 1,
            columns: 1,
            gap: 0,
            corner_radius: 0,
        })
        .unwrap()
    }

    #[test]
    fn test_bounds_and_viewport() {
        let drawing = Drawing::create(&sheet(), UnitConverter::default(), 10_000).unwrap();
        assert_eq!(drawing.bounds().width(), 1_440_000);
        assert_eq!(drawing.bounds().height(), 720_000);
        assert_eq!(drawing.viewbox(), "-1.0000 -1.0000 146.0000 74.0000");
    }

    #[test]
    fn test_canvas_in_millimeters() {
        let drawing = Drawing::create(&sheet(), UnitConverter::default(), 0).unwrap();
        let (w, h) = drawing.canvas_size_mm();
        assert!((w - 50.8).abs() < 1e-9);
        assert!((h - 25.4).abs() < 1e-9);
    }

    #[test]
    fn test_placeholders() {
        let drawing = Drawing::create(&sheet(), UnitConverter::default(), 0).unwrap();
        let values = drawing.placeholders("Deck");
        assert_eq!(values["title"], "Deck");
        assert_eq!(values["design"], "cardsheet");
        assert_eq!(values["sheet_width"], "50.80");
        assert_eq!(values["card_length"], "50.80");
        assert_eq!(values["unit"], "mm");
        assert!(values["paths"].starts_with("<path id=\"cards\""));
    }

    #[test]
    fn test_title_is_escaped() {
        let drawing = Drawing::create(&sheet(), UnitConverter::default(), 0).unwrap();
        let values = drawing.placeholders("Tom & <Jerry> \"2\"");
        assert_eq!(values["title"], "Tom &amp; &lt;Jerry&gt; &quot;2&quot;");

        let svg = drawing.to_svg(&Template::builtin().unwrap(), "Tom & <Jerry>");
        assert!(svg.contains("<title>Tom &amp; &lt;Jerry&gt;</title>"));
        assert!(!svg.contains("Tom & <Jerry>"));
    }

    #[test]
    fn test_svg_output_has_no_unfilled_placeholders() {
        let drawing = Drawing::create(&sheet(), UnitConverter::default(), 0).unwrap();
        let svg = drawing.to_svg(&Template::builtin().unwrap(), "Deck");
        assert!(svg.contains("<title>Deck</title>"));
        assert!(!svg.contains("{{"));
    }
}
