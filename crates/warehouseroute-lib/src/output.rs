use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::path::Route;

/// Endpoint of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl RouteEndpoint {
    fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or("<unknown>")
    }
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl RouteStep {
    fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a planned route that higher-level consumers
/// can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub hops: usize,
    pub cost: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`Route`] into a structured summary with resolved location
    /// labels.
    ///
    /// A step whose node id is not present in the graph keeps a `None`
    /// label and renders as `<unknown>`.
    pub fn from_route(graph: &Graph, route: &Route) -> Result<Self> {
        if route.path.is_empty() {
            return Err(Error::EmptyRoute);
        }

        let steps = route
            .path
            .iter()
            .enumerate()
            .map(|(index, id)| RouteStep {
                index,
                id: *id,
                label: graph.node(*id).ok().map(|node| node.location.to_string()),
            })
            .collect::<Vec<_>>();

        let start = RouteEndpoint {
            id: steps
                .first()
                .map(|step| step.id)
                .expect("validated non-empty path"),
            label: steps.first().and_then(|step| step.label.clone()),
        };
        let goal = RouteEndpoint {
            id: steps
                .last()
                .map(|step| step.id)
                .expect("validated non-empty path"),
            label: steps.last().and_then(|step| step.label.clone()),
        };

        Ok(Self {
            start,
            goal,
            hops: route.hop_count(),
            cost: route.cost,
            steps,
        })
    }

    /// Render the summary as plain text.
    pub fn render_plain(&self) -> String {
        let unit = if self.hops == 1 { "hop" } else { "hops" };
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} {})",
            self.start.display_label(),
            self.goal.display_label(),
            self.hops,
            unit
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "{:>3}: {} ({})",
                step.index,
                step.display_label(),
                step.id
            );
        }
        let _ = writeln!(buffer, "Distance: {:.1}", self.cost);
        buffer
    }
}
