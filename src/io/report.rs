use serde::Serialize;

use crate::algorithm::ShortestPathResult;
use crate::config::ReportFormat;
use crate::cost::EdgeCost;
use crate::Result;

/// Marker appended to rows whose vertex has no predecessor
const NO_PREDECESSOR_MARKER: &str = " >>-->";

/// One destination of a shortest path report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow<W> {
    pub from: usize,
    pub to: usize,
    /// Cumulative cost, `None` when `to` is unreachable
    pub cost: Option<W>,
    pub previous: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Vec<usize>>,
}

/// Per-vertex summary of a shortest path computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report<W> {
    pub source: usize,
    pub rows: Vec<ReportRow<W>>,
}

impl<W> Report<W>
where
    W: EdgeCost + Serialize,
{
    /// Builds a report with one row per vertex, optionally including full routes
    pub fn new(result: &ShortestPathResult<W>, include_routes: bool) -> Self {
        let rows = (0..result.vertex_count())
            .map(|to| ReportRow {
                from: result.source,
                to,
                cost: result.distance(to),
                previous: result.predecessor(to),
                route: if include_routes {
                    result.path_to(to).ok().flatten()
                } else {
                    None
                },
            })
            .collect();

        Report {
            source: result.source,
            rows,
        }
    }

    /// Renders the fixed-width table, each column `width` characters wide
    ///
    /// Unreachable costs print as `inf` and a missing predecessor as `-1`
    /// followed by a marker, so the source row and unreachable rows stand out.
    pub fn render_table(&self, width: usize) -> String {
        let mut out = format!("{:>w3$}{:>w$}\n", "Cum.", "Prev", w3 = 3 * width, w = width);
        out.push_str(&format!(
            "{:>w$}{:>w$}{:>w$}{:>w$}\n",
            "From:",
            "To:",
            "Cost:",
            "Node:",
            w = width
        ));

        for row in &self.rows {
            let cost = row
                .cost
                .map_or_else(|| "inf".to_string(), |cost| cost.to_string());
            let previous = row
                .previous
                .map_or_else(|| "-1".to_string(), |previous| previous.to_string());
            out.push_str(&format!(
                "{:>w$}{:>w$}{:>w$}{:>w$}",
                row.from,
                row.to,
                cost,
                previous,
                w = width
            ));
            if row.previous.is_none() {
                out.push_str(NO_PREDECESSOR_MARKER);
            }
            if let Some(route) = &row.route {
                let hops: Vec<String> = route.iter().map(ToString::to_string).collect();
                out.push_str("  ");
                out.push_str(&hops.join(" -> "));
            }
            out.push('\n');
        }

        out
    }

    /// Serializes the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders the report in the requested format
    pub fn render(&self, format: ReportFormat, width: usize) -> Result<String> {
        match format {
            ReportFormat::Table => Ok(self.render_table(width)),
            ReportFormat::Json => self.to_json(),
        }
    }
}
