//! Grouped bar charts comparing circuit resources.
//!
//! The demo suite uses these to show what the ancilla variant costs: one
//! group per metric (qubits, gates, depth), one bar per circuit variant.
//! Values come straight from `Circuit` introspection, never hardcoded.

use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use huginn_ir::Circuit;

use crate::error::{DiagramError, DiagramResult};

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 400.0;
const PLOT_LEFT: f64 = 60.0;
const PLOT_TOP: f64 = 70.0;
const PLOT_BOTTOM: f64 = 60.0;
const PLOT_RIGHT: f64 = 30.0;
const BAR_GAP: f64 = 10.0;

const SERIES_COLORS: [&str; 2] = ["#1f77b4", "#ff7f0e"];
const COLOR_AXIS: &str = "#333333";

/// One bar series (a circuit variant) across all metric groups.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    /// Legend label.
    pub label: String,
    /// One value per metric group.
    pub values: Vec<f64>,
}

/// A grouped bar chart specification.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    /// Chart title.
    pub title: String,
    /// Metric group labels along the x axis.
    pub groups: Vec<String>,
    /// Bar series, at most one color per entry in `SERIES_COLORS`.
    pub series: Vec<ChartSeries>,
}

impl ChartSpec {
    /// Compare resource counts of two circuit variants.
    ///
    /// Groups are qubits, gate count, and depth, measured from the
    /// circuits themselves.
    pub fn compare(
        title: impl Into<String>,
        baseline: (&str, &Circuit),
        other: (&str, &Circuit),
    ) -> Self {
        let metrics =
            |c: &Circuit| vec![c.num_qubits() as f64, c.size() as f64, c.depth() as f64];
        Self {
            title: title.into(),
            groups: vec!["qubits".into(), "gates".into(), "depth".into()],
            series: vec![
                ChartSeries {
                    label: baseline.0.to_string(),
                    values: metrics(baseline.1),
                },
                ChartSeries {
                    label: other.0.to_string(),
                    values: metrics(other.1),
                },
            ],
        }
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render a grouped bar chart as an SVG document.
pub fn comparison_chart(spec: &ChartSpec) -> DiagramResult<String> {
    if spec.groups.is_empty() || spec.series.is_empty() {
        return Err(DiagramError::EmptyCircuit);
    }

    let max_value = spec
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(1.0f64, f64::max);

    let plot_w = CHART_WIDTH - PLOT_LEFT - PLOT_RIGHT;
    let plot_h = CHART_HEIGHT - PLOT_TOP - PLOT_BOTTOM;
    let baseline_y = CHART_HEIGHT - PLOT_BOTTOM;
    let group_w = plot_w / spec.groups.len() as f64;
    let bar_w = (group_w - BAR_GAP * 2.0) / spec.series.len() as f64;

    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CHART_WIDTH}" height="{CHART_HEIGHT}" viewBox="0 0 {CHART_WIDTH} {CHART_HEIGHT}">"#
    );
    let _ = write!(
        out,
        r#"<rect width="{CHART_WIDTH}" height="{CHART_HEIGHT}" fill="white"/>"#
    );
    let _ = write!(
        out,
        r#"<text x="{x}" y="30" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle">{title}</text>"#,
        x = CHART_WIDTH / 2.0,
        title = xml_escape(&spec.title)
    );

    // Axes.
    let _ = write!(
        out,
        r#"<line x1="{PLOT_LEFT}" y1="{PLOT_TOP}" x2="{PLOT_LEFT}" y2="{baseline_y}" stroke="{COLOR_AXIS}" stroke-width="1.5"/>"#
    );
    let _ = write!(
        out,
        r#"<line x1="{PLOT_LEFT}" y1="{baseline_y}" x2="{x2}" y2="{baseline_y}" stroke="{COLOR_AXIS}" stroke-width="1.5"/>"#,
        x2 = CHART_WIDTH - PLOT_RIGHT,
    );

    // Bars with value labels.
    for (gi, group) in spec.groups.iter().enumerate() {
        let group_x = PLOT_LEFT + gi as f64 * group_w;
        for (si, series) in spec.series.iter().enumerate() {
            let value = series.values.get(gi).copied().unwrap_or(0.0);
            let bar_h = value / max_value * plot_h;
            let bx = group_x + BAR_GAP + si as f64 * bar_w;
            let by = baseline_y - bar_h;
            let color = SERIES_COLORS[si % SERIES_COLORS.len()];
            let _ = write!(
                out,
                r#"<rect x="{bx}" y="{by}" width="{w}" height="{bar_h}" fill="{color}"/>"#,
                w = bar_w - 4.0,
            );
            let _ = write!(
                out,
                r#"<text x="{tx}" y="{ty}" font-family="sans-serif" font-size="12" text-anchor="middle">{value}</text>"#,
                tx = bx + (bar_w - 4.0) / 2.0,
                ty = by - 5.0,
            );
        }
        let _ = write!(
            out,
            r#"<text x="{tx}" y="{ty}" font-family="sans-serif" font-size="13" text-anchor="middle">{label}</text>"#,
            tx = group_x + group_w / 2.0,
            ty = baseline_y + 22.0,
            label = xml_escape(group)
        );
    }

    // Legend.
    for (si, series) in spec.series.iter().enumerate() {
        let lx = PLOT_LEFT + si as f64 * 160.0;
        let ly = CHART_HEIGHT - 18.0;
        let color = SERIES_COLORS[si % SERIES_COLORS.len()];
        let _ = write!(
            out,
            r#"<rect x="{lx}" y="{ry}" width="14" height="14" fill="{color}"/>"#,
            ry = ly - 11.0,
        );
        let _ = write!(
            out,
            r#"<text x="{tx}" y="{ly}" font-family="sans-serif" font-size="13">{label}</text>"#,
            tx = lx + 20.0,
            label = xml_escape(&series.label)
        );
    }

    out.push_str("</svg>\n");
    Ok(out)
}

/// Render a comparison chart and write it to a file.
pub fn write_comparison_chart(spec: &ChartSpec, path: impl AsRef<Path>) -> DiagramResult<()> {
    let path = path.as_ref();
    std::fs::write(path, comparison_chart(spec)?)?;
    debug!(path = %path.display(), "wrote comparison chart");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use huginn_ir::QubitId;

    fn two_circuits() -> (Circuit, Circuit) {
        let mut phase = Circuit::with_size("phase", 2, 2);
        phase.h(QubitId(0)).unwrap();
        phase.h(QubitId(1)).unwrap();
        phase.cz(QubitId(0), QubitId(1)).unwrap();

        let mut aux = Circuit::with_size("aux", 3, 2);
        aux.x(QubitId(2)).unwrap();
        aux.h(QubitId(2)).unwrap();
        aux.cx(QubitId(0), QubitId(2)).unwrap();

        (phase, aux)
    }

    #[test]
    fn test_compare_reads_circuit_metrics() {
        let (phase, aux) = two_circuits();
        let spec = ChartSpec::compare("dj", ("no ancilla", &phase), ("ancilla", &aux));

        assert_eq!(spec.groups.len(), 3);
        assert_eq!(spec.series[0].values[0], 2.0);
        assert_eq!(spec.series[1].values[0], 3.0);
        assert_eq!(spec.series[0].values[1], 3.0);
    }

    #[test]
    fn test_chart_structure() {
        let (phase, aux) = two_circuits();
        let spec = ChartSpec::compare("resources", ("no ancilla", &phase), ("ancilla", &aux));
        let svg = comparison_chart(&spec).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("resources"));
        assert!(svg.contains("qubits"));
        assert!(svg.contains("depth"));
        assert!(svg.contains("no ancilla"));
        // One bar per series per group.
        let bars = svg.matches(SERIES_COLORS[0]).count();
        assert!(bars >= 3);
    }

    #[test]
    fn test_empty_spec_rejected() {
        let spec = ChartSpec {
            title: "empty".into(),
            groups: vec![],
            series: vec![],
        };
        assert!(comparison_chart(&spec).is_err());
    }
}
