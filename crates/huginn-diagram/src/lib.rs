//! Static diagram generation for Huginn circuits.
//!
//! Two outputs, both plain SVG written to disk with no display dependency:
//!
//! - [`SvgRenderer`] draws a circuit schematic from a greedy column
//!   [`Layout`]: wires with ket labels, colored gate boxes, control dots,
//!   measurement meters, and labeled stage barriers.
//! - [`comparison_chart`] draws a grouped bar chart of qubit, gate, and
//!   depth counts between two circuit variants, with every value read from
//!   the circuits themselves.

pub mod chart;
pub mod error;
pub mod layout;
pub mod svg;

pub use chart::{comparison_chart, write_comparison_chart, ChartSeries, ChartSpec};
pub use error::{DiagramError, DiagramResult};
pub use layout::{Element, ElementKind, Layout};
pub use svg::SvgRenderer;
