//! SVG emission for circuit schematics.
//!
//! The renderer draws the classic textbook picture: one horizontal wire per
//! qubit with a |label⟩ ket at the left, gates as rounded colored boxes,
//! controlled gates as dots joined by vertical lines, measurements as meter
//! boxes, and dashed barrier lines labeled with their stage name.

use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use huginn_ir::{Circuit, StandardGate};

use crate::error::DiagramResult;
use crate::layout::{Element, ElementKind, Layout};

const MARGIN_LEFT: f64 = 92.0;
const MARGIN_TOP: f64 = 52.0;
const MARGIN_RIGHT: f64 = 28.0;
const MARGIN_BOTTOM: f64 = 24.0;
const COL_WIDTH: f64 = 56.0;
const ROW_HEIGHT: f64 = 52.0;
const BOX_SIZE: f64 = 34.0;
const DOT_RADIUS: f64 = 5.0;
const TARGET_RADIUS: f64 = 11.0;

const COLOR_H: &str = "#1f77b4";
const COLOR_X: &str = "#ff7f0e";
const COLOR_Z: &str = "#2ca02c";
const COLOR_Y: &str = "#9467bd";
const COLOR_SWAP: &str = "#8c564b";
const COLOR_MEASURE: &str = "#d62728";
const COLOR_WIRE: &str = "#333333";
const COLOR_BARRIER: &str = "#888888";

fn gate_color(gate: StandardGate) -> &'static str {
    match gate {
        StandardGate::H => COLOR_H,
        StandardGate::X | StandardGate::CX | StandardGate::CCX => COLOR_X,
        StandardGate::Y | StandardGate::CY => COLOR_Y,
        StandardGate::Z | StandardGate::CZ => COLOR_Z,
        StandardGate::S | StandardGate::Sdg | StandardGate::T | StandardGate::Tdg => COLOR_Z,
        StandardGate::Swap => COLOR_SWAP,
        StandardGate::I => COLOR_WIRE,
    }
}

fn gate_label(gate: StandardGate) -> &'static str {
    match gate {
        StandardGate::I => "I",
        StandardGate::X => "X",
        StandardGate::Y => "Y",
        StandardGate::Z => "Z",
        StandardGate::H => "H",
        StandardGate::S => "S",
        StandardGate::Sdg => "S†",
        StandardGate::T => "T",
        StandardGate::Tdg => "T†",
        // Multi-qubit gates draw symbols, not labeled boxes.
        _ => "",
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Renders one circuit as a static SVG schematic.
pub struct SvgRenderer {
    layout: Layout,
    title: String,
}

impl SvgRenderer {
    /// Lay out a circuit for rendering. The circuit name becomes the title.
    pub fn new(circuit: &Circuit) -> DiagramResult<Self> {
        Ok(Self {
            layout: Layout::from_circuit(circuit)?,
            title: circuit.name().to_string(),
        })
    }

    fn width(&self) -> f64 {
        MARGIN_LEFT + self.layout.num_columns.max(1) as f64 * COL_WIDTH + MARGIN_RIGHT
    }

    fn height(&self) -> f64 {
        MARGIN_TOP + self.layout.num_qubits as f64 * ROW_HEIGHT + MARGIN_BOTTOM
    }

    fn wire_y(&self, row: usize) -> f64 {
        MARGIN_TOP + row as f64 * ROW_HEIGHT + ROW_HEIGHT / 2.0
    }

    fn column_x(&self, column: usize) -> f64 {
        MARGIN_LEFT + column as f64 * COL_WIDTH + COL_WIDTH / 2.0
    }

    /// Produce the full SVG document.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let (w, h) = (self.width(), self.height());

        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        let _ = write!(out, r#"<rect width="{w}" height="{h}" fill="white"/>"#);
        let _ = write!(
            out,
            r#"<text x="{x}" y="26" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle">{title}</text>"#,
            x = w / 2.0,
            title = xml_escape(&self.title)
        );

        self.render_wires(&mut out);
        for element in &self.layout.elements {
            self.render_element(&mut out, element);
        }

        out.push_str("</svg>\n");
        out
    }

    fn render_wires(&self, out: &mut String) {
        let x_end = self.width() - MARGIN_RIGHT;
        for (row, label) in self.layout.wire_labels.iter().enumerate() {
            let y = self.wire_y(row);
            let _ = write!(
                out,
                r#"<line x1="{x1}" y1="{y}" x2="{x_end}" y2="{y}" stroke="{COLOR_WIRE}" stroke-width="1.5"/>"#,
                x1 = MARGIN_LEFT - 6.0,
            );
            let _ = write!(
                out,
                r#"<text x="{x}" y="{ty}" font-family="serif" font-size="14" text-anchor="end">|{label}⟩</text>"#,
                x = MARGIN_LEFT - 12.0,
                ty = y + 5.0,
                label = xml_escape(label)
            );
        }
    }

    fn render_element(&self, out: &mut String, element: &Element) {
        let x = self.column_x(element.column);
        match &element.kind {
            ElementKind::Gate(gate) => self.render_gate(out, element, *gate, x),
            ElementKind::Measure => {
                self.render_measure(out, x, self.wire_y(element.top_row()));
            }
            ElementKind::Barrier(label) => self.render_barrier(out, x, label.as_deref()),
        }
    }

    fn render_gate(&self, out: &mut String, element: &Element, gate: StandardGate, x: f64) {
        let color = gate_color(gate);
        match gate {
            StandardGate::CX => {
                let (c, t) = (element.qubits[0].0 as usize, element.qubits[1].0 as usize);
                self.render_connector(out, x, c, t, color);
                self.render_control_dot(out, x, self.wire_y(c), color);
                self.render_oplus(out, x, self.wire_y(t), color);
            }
            StandardGate::CCX => {
                let rows: Vec<_> = element.qubits.iter().map(|q| q.0 as usize).collect();
                self.render_connector(out, x, element.top_row(), element.bottom_row(), color);
                self.render_control_dot(out, x, self.wire_y(rows[0]), color);
                self.render_control_dot(out, x, self.wire_y(rows[1]), color);
                self.render_oplus(out, x, self.wire_y(rows[2]), color);
            }
            StandardGate::CZ => {
                let (c, t) = (element.qubits[0].0 as usize, element.qubits[1].0 as usize);
                self.render_connector(out, x, c, t, color);
                self.render_control_dot(out, x, self.wire_y(c), color);
                self.render_control_dot(out, x, self.wire_y(t), color);
            }
            StandardGate::CY => {
                let (c, t) = (element.qubits[0].0 as usize, element.qubits[1].0 as usize);
                self.render_connector(out, x, c, t, color);
                self.render_control_dot(out, x, self.wire_y(c), color);
                self.render_box(out, x, self.wire_y(t), "Y", color);
            }
            StandardGate::Swap => {
                let (a, b) = (element.qubits[0].0 as usize, element.qubits[1].0 as usize);
                self.render_connector(out, x, a, b, color);
                self.render_swap_cross(out, x, self.wire_y(a), color);
                self.render_swap_cross(out, x, self.wire_y(b), color);
            }
            _ => {
                let y = self.wire_y(element.top_row());
                self.render_box(out, x, y, gate_label(gate), color);
            }
        }
    }

    fn render_box(&self, out: &mut String, x: f64, y: f64, label: &str, color: &str) {
        let half = BOX_SIZE / 2.0;
        let _ = write!(
            out,
            r#"<rect x="{rx}" y="{ry}" width="{BOX_SIZE}" height="{BOX_SIZE}" rx="6" fill="{color}"/>"#,
            rx = x - half,
            ry = y - half,
        );
        let _ = write!(
            out,
            r#"<text x="{x}" y="{ty}" font-family="sans-serif" font-size="15" font-weight="bold" fill="white" text-anchor="middle">{label}</text>"#,
            ty = y + 5.0,
        );
    }

    fn render_connector(&self, out: &mut String, x: f64, row_a: usize, row_b: usize, color: &str) {
        let _ = write!(
            out,
            r#"<line x1="{x}" y1="{y1}" x2="{x}" y2="{y2}" stroke="{color}" stroke-width="2"/>"#,
            y1 = self.wire_y(row_a.min(row_b)),
            y2 = self.wire_y(row_a.max(row_b)),
        );
    }

    fn render_control_dot(&self, out: &mut String, x: f64, y: f64, color: &str) {
        let _ = write!(
            out,
            r#"<circle cx="{x}" cy="{y}" r="{DOT_RADIUS}" fill="{color}"/>"#
        );
    }

    fn render_oplus(&self, out: &mut String, x: f64, y: f64, color: &str) {
        let _ = write!(
            out,
            r#"<circle cx="{x}" cy="{y}" r="{TARGET_RADIUS}" fill="white" stroke="{color}" stroke-width="2"/>"#
        );
        let _ = write!(
            out,
            r#"<line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" stroke="{color}" stroke-width="2"/>"#,
            x1 = x - TARGET_RADIUS,
            x2 = x + TARGET_RADIUS,
        );
        let _ = write!(
            out,
            r#"<line x1="{x}" y1="{y1}" x2="{x}" y2="{y2}" stroke="{color}" stroke-width="2"/>"#,
            y1 = y - TARGET_RADIUS,
            y2 = y + TARGET_RADIUS,
        );
    }

    fn render_swap_cross(&self, out: &mut String, x: f64, y: f64, color: &str) {
        let r = 7.0;
        let _ = write!(
            out,
            r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{color}" stroke-width="2"/>"#,
            x1 = x - r,
            y1 = y - r,
            x2 = x + r,
            y2 = y + r,
        );
        let _ = write!(
            out,
            r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{color}" stroke-width="2"/>"#,
            x1 = x - r,
            y1 = y + r,
            x2 = x + r,
            y2 = y - r,
        );
    }

    fn render_measure(&self, out: &mut String, x: f64, y: f64) {
        let half = BOX_SIZE / 2.0;
        let _ = write!(
            out,
            r#"<rect x="{rx}" y="{ry}" width="{BOX_SIZE}" height="{BOX_SIZE}" rx="6" fill="{COLOR_MEASURE}"/>"#,
            rx = x - half,
            ry = y - half,
        );
        // Meter dial: an arc plus a tilted needle.
        let _ = write!(
            out,
            r#"<path d="M {ax} {ay} A 10 10 0 0 1 {bx} {by}" fill="none" stroke="white" stroke-width="2"/>"#,
            ax = x - 10.0,
            ay = y + 7.0,
            bx = x + 10.0,
            by = y + 7.0,
        );
        let _ = write!(
            out,
            r#"<line x1="{x}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="white" stroke-width="2"/>"#,
            y1 = y + 7.0,
            x2 = x + 7.0,
            y2 = y - 7.0,
        );
    }

    fn render_barrier(&self, out: &mut String, x: f64, label: Option<&str>) {
        let y1 = self.wire_y(0) - ROW_HEIGHT / 2.0 + 8.0;
        let y2 = self.wire_y(self.layout.num_qubits - 1) + ROW_HEIGHT / 2.0 - 8.0;
        let _ = write!(
            out,
            r#"<line x1="{x}" y1="{y1}" x2="{x}" y2="{y2}" stroke="{COLOR_BARRIER}" stroke-width="1.5" stroke-dasharray="5,4"/>"#
        );
        if let Some(label) = label {
            let _ = write!(
                out,
                r#"<text x="{x}" y="{ty}" font-family="sans-serif" font-size="11" font-style="italic" fill="{COLOR_BARRIER}" text-anchor="middle">{label}</text>"#,
                ty = y1 - 5.0,
                label = xml_escape(label)
            );
        }
    }

    /// Render and write the schematic to a file.
    pub fn write_svg(&self, path: impl AsRef<Path>) -> DiagramResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.render())?;
        debug!(path = %path.display(), "wrote circuit diagram");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huginn_ir::{ClbitId, QubitId};

    fn sample_circuit() -> Circuit {
        let mut circuit = Circuit::new("sample");
        let q = circuit.add_qreg("q", 2);
        circuit.add_named_qubit("aux");
        circuit.add_creg("c", 2);
        circuit.h(q[0]).unwrap();
        circuit.h(q[1]).unwrap();
        circuit.barrier_all("oracle").unwrap();
        circuit.cz(q[0], q[1]).unwrap();
        circuit.measure(q[0], ClbitId(0)).unwrap();
        circuit.measure(q[1], ClbitId(1)).unwrap();
        circuit
    }

    #[test]
    fn test_render_structure() {
        let svg = SvgRenderer::new(&sample_circuit()).unwrap().render();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("sample"));
        assert!(svg.contains("|q0⟩"));
        assert!(svg.contains("|aux⟩"));
        assert!(svg.contains("stroke-dasharray"));
        assert!(svg.contains("oracle"));
    }

    #[test]
    fn test_gate_colors_present() {
        let svg = SvgRenderer::new(&sample_circuit()).unwrap().render();
        assert!(svg.contains(COLOR_H));
        assert!(svg.contains(COLOR_Z));
        assert!(svg.contains(COLOR_MEASURE));
    }

    #[test]
    fn test_cx_draws_target_circle() {
        let mut circuit = Circuit::with_size("cx", 2, 0);
        circuit.cx(QubitId(0), QubitId(1)).unwrap();

        let svg = SvgRenderer::new(&circuit).unwrap().render();
        assert!(svg.contains(COLOR_X));
        assert!(svg.contains(r#"fill="white" stroke"#));
    }

    #[test]
    fn test_title_is_escaped() {
        let mut circuit = Circuit::with_size("a<b>&c", 1, 0);
        circuit.h(QubitId(0)).unwrap();

        let svg = SvgRenderer::new(&circuit).unwrap().render();
        assert!(svg.contains("a&lt;b&gt;&amp;c"));
        assert!(!svg.contains("a<b>&c"));
    }

    #[test]
    fn test_empty_circuit_rejected() {
        let circuit = Circuit::new("empty");
        assert!(SvgRenderer::new(&circuit).is_err());
    }
}
