//! SVG document backend
//!
//! The root element declares its size in millimetres and a matching
//! `viewBox`, so one user unit is one millimetre when printed.

use crate::layout::{CircleShape, Primitive, RectShape, TextLabel};
use std::fmt;
use std::io;

use super::Canvas;

/// An SVG drawing that accumulates primitives in paint order
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDrawing {
    width_mm: f32,
    height_mm: f32,
    primitives: Vec<Primitive>,
}

impl SvgDrawing {
    pub fn new(width_mm: f32, height_mm: f32) -> Self {
        Self {
            width_mm,
            height_mm,
            primitives: Vec::new(),
        }
    }

    /// Figure size as (width, height) in mm
    pub fn size_mm(&self) -> (f32, f32) {
        (self.width_mm, self.height_mm)
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn to_svg_string(&self) -> String {
        self.to_string()
    }

    pub fn write_to(&self, mut writer: impl io::Write) -> io::Result<()> {
        writer.write_all(self.to_string().as_bytes())
    }
}

impl Canvas for SvgDrawing {
    fn draw(&mut self, primitive: &Primitive) {
        self.primitives.push(primitive.clone());
    }
}

impl fmt::Display for SvgDrawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<?xml version="1.0" encoding="utf-8" ?>"#)?;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">"#,
            w = num(self.width_mm),
            h = num(self.height_mm)
        )?;

        for primitive in &self.primitives {
            match primitive {
                Primitive::Rect(rect) => write_rect(f, rect)?,
                Primitive::Circle(circle) => write_circle(f, circle)?,
                Primitive::Text(label) => write_text(f, label)?,
            }
        }

        writeln!(f, "</svg>")
    }
}

fn write_rect(f: &mut fmt::Formatter<'_>, rect: &RectShape) -> fmt::Result {
    writeln!(
        f,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
        num(rect.origin.x),
        num(rect.origin.y),
        num(rect.width),
        num(rect.height),
        num(rect.corner_radius),
        escape(&rect.style.fill),
        escape(&rect.style.stroke),
        num(rect.style.stroke_width)
    )
}

fn write_circle(f: &mut fmt::Formatter<'_>, circle: &CircleShape) -> fmt::Result {
    writeln!(
        f,
        r#"  <circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
        num(circle.center.x),
        num(circle.center.y),
        num(circle.radius),
        escape(&circle.style.fill),
        escape(&circle.style.stroke),
        num(circle.style.stroke_width)
    )
}

fn write_text(f: &mut fmt::Formatter<'_>, label: &TextLabel) -> fmt::Result {
    let mut attrs = format!(
        r#"x="{}" y="{}" text-anchor="{}" font-size="{}" font-family="{}""#,
        num(label.insert.x),
        num(label.insert.y),
        label.anchor.as_str(),
        num(label.font_size),
        escape(&label.font_family)
    );
    if label.middle_baseline {
        attrs.push_str(r#" alignment-baseline="middle""#);
    }
    writeln!(f, "  <text {}>{}</text>", attrs, escape(&label.text))
}

/// Format a length with at most four decimals and no trailing zeros
fn num(value: f32) -> String {
    let mut s = format!("{:.4}", value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Point, ShapeStyle, TextAnchor};

    fn style(fill: &str) -> ShapeStyle {
        ShapeStyle {
            fill: fill.to_string(),
            stroke: "black".to_string(),
            stroke_width: 0.5,
        }
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(9.0), "9");
        assert_eq!(num(137.76), "137.76");
        assert_eq!(num(0.75), "0.75");
        assert_eq!(num(-0.00001), "0");
        assert_eq!(num(5.0 + 14.38), "19.38");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
        assert_eq!(escape("#ff0000"), "#ff0000");
    }

    #[test]
    fn test_root_element_uses_millimetres() {
        let drawing = SvgDrawing::new(137.76, 95.48);
        let svg = drawing.to_svg_string();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="137.76mm""#));
        assert!(svg.contains(r#"height="95.48mm""#));
        assert!(svg.contains(r#"viewBox="0 0 137.76 95.48""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_elements_in_paint_order() {
        let mut drawing = SvgDrawing::new(100.0, 50.0);
        drawing.draw(&Primitive::Rect(RectShape {
            origin: Point::new(5.0, 5.0),
            width: 90.0,
            height: 40.0,
            corner_radius: 3.18,
            style: style("white"),
        }));
        drawing.draw(&Primitive::Circle(CircleShape {
            center: Point::new(20.0, 20.0),
            radius: 3.0,
            style: style("rgb(255,0,0)"),
        }));
        drawing.draw(&Primitive::Text(TextLabel {
            text: "A".to_string(),
            insert: Point::new(12.5, 20.5),
            anchor: TextAnchor::Middle,
            font_size: 4.0,
            font_family: "Futura".to_string(),
            middle_baseline: true,
        }));

        let svg = drawing.to_svg_string();
        let rect = svg.find("<rect").unwrap();
        let circle = svg.find("<circle").unwrap();
        let text = svg.find("<text").unwrap();
        assert!(rect < circle && circle < text);

        assert!(svg.contains(
            r#"<rect x="5" y="5" width="90" height="40" rx="3.18" fill="white" stroke="black" stroke-width="0.5"/>"#
        ));
        assert!(svg.contains(
            r#"<circle cx="20" cy="20" r="3" fill="rgb(255,0,0)" stroke="black" stroke-width="0.5"/>"#
        ));
        assert!(svg.contains(
            r#"<text x="12.5" y="20.5" text-anchor="middle" font-size="4" font-family="Futura" alignment-baseline="middle">A</text>"#
        ));
    }

    #[test]
    fn test_text_anchors() {
        let mut drawing = SvgDrawing::new(50.0, 20.0);
        for (anchor, text) in [(TextAnchor::Start, "left"), (TextAnchor::End, "right")] {
            drawing.draw(&Primitive::Text(TextLabel {
                text: text.to_string(),
                insert: Point::new(25.0, 10.0),
                anchor,
                font_size: 3.0,
                font_family: "Futura".to_string(),
                middle_baseline: false,
            }));
        }

        let svg = drawing.to_svg_string();
        let start = r#"text-anchor="start" font-size="3" font-family="Futura">left<"#;
        let end = r#"text-anchor="end" font-size="3" font-family="Futura">right<"#;
        assert!(svg.contains(start));
        assert!(svg.contains(end));
        assert!(!svg.contains("alignment-baseline"));
    }

    #[test]
    fn test_write_to_matches_string() {
        let drawing = SvgDrawing::new(10.0, 10.0);
        let mut bytes = Vec::new();
        drawing.write_to(&mut bytes).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), drawing.to_svg_string());
    }
}
