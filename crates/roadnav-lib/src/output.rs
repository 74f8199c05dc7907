use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::NodeId;
use crate::routing::RouteStep;

/// Flat pace used for route time estimates: 5 minutes per kilometer.
///
/// Independent of the speed ratings carried on individual edges.
pub const FLAT_MINUTES_PER_KM: f64 = 5.0;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Endpoint within a computed route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    fn from_step(step: &RouteStep) -> Self {
        Self {
            id: step.node,
            name: step.name.clone(),
        }
    }

    fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("junction #{}", self.id))
    }
}

/// Structured representation of a computed route that higher-level consumers
/// can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub hops: usize,
    pub total_distance_m: f64,
    pub estimated_minutes: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Summarise a non-empty route.
    pub fn from_steps(steps: Vec<RouteStep>) -> Result<Self> {
        let (Some(first), Some(last)) = (steps.first(), steps.last()) else {
            return Err(Error::EmptyRoutePlan);
        };
        let start = RouteEndpoint::from_step(first);
        let goal = RouteEndpoint::from_step(last);
        let total_distance_m = total_distance(&steps);

        Ok(Self {
            start,
            goal,
            hops: steps.len() - 1,
            total_distance_m,
            estimated_minutes: estimate_minutes(total_distance_m),
            steps,
        })
    }

    pub fn total_km(&self) -> f64 {
        self.total_distance_m / 1000.0
    }

    /// Status line in the form `Route found: 4.21 km | 21 mins`.
    pub fn status_line(&self) -> String {
        format!(
            "Route found: {:.2} km | {}",
            self.total_km(),
            format_duration(self.estimated_minutes)
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops)",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops
        );
        for (index, step) in self.steps.iter().enumerate() {
            let _ = writeln!(buffer, "{:>3}: {}", index, step.instruction);
        }
        let _ = writeln!(buffer, "{}", self.status_line());
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} hops)",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops
        );
        for (index, step) in self.steps.iter().enumerate() {
            let _ = writeln!(
                buffer,
                "* {:>2}. {} (`{}`)",
                index,
                step.instruction,
                format_step_distance(step.distance)
            );
        }
        let _ = writeln!(buffer, "\n_{}_", self.status_line());
        buffer
    }
}

/// Sum of the per-step distances of a route, in meters.
pub fn total_distance(steps: &[RouteStep]) -> f64 {
    steps.iter().map(|step| step.distance).sum()
}

/// Estimated travel time in minutes at the flat pace.
pub fn estimate_minutes(meters: f64) -> f64 {
    meters / 1000.0 * FLAT_MINUTES_PER_KM
}

/// Format minutes as `"<m> mins"` below an hour, otherwise `"<h>h <m>m"`.
/// Fractional minutes are truncated.
pub fn format_duration(minutes: f64) -> String {
    if minutes < 60.0 {
        format!("{} mins", minutes as i64)
    } else {
        let whole = minutes as i64;
        format!("{}h {}m", whole / 60, whole % 60)
    }
}

/// Format a step distance as `"1.2 km"` from one kilometer up, else `"850 m"`.
pub fn format_step_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.1} km", meters / 1000.0)
    } else {
        format!("{} m", meters as i64)
    }
}
