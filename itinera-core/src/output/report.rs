//! Plain-text and JSON views of a computed route

use serde::Serialize;
use serde_json::json;

use crate::model::{NodeId, TransportMode, TransportNetwork};
use crate::routing::RoutePath;

/// One route leg with names resolved, ready for serialization
#[derive(Debug, Clone, Serialize)]
pub struct SegmentReport {
    pub from: String,
    pub to: String,
    pub mode: TransportMode,
    pub distance_km: f64,
    pub time_hours: f64,
    pub cost: f64,
}

/// Serializable summary of a whole route
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub segments: Vec<SegmentReport>,
    pub total_distance_km: f64,
    pub total_time_hours: f64,
    pub total_cost: f64,
}

fn node_name(network: &TransportNetwork, id: NodeId) -> String {
    network
        .node(id)
        .map(|node| node.name.clone())
        .unwrap_or_default()
}

impl RouteReport {
    pub fn new(network: &TransportNetwork, path: &RoutePath) -> Self {
        let segments = path
            .segments()
            .iter()
            .map(|segment| SegmentReport {
                from: node_name(network, segment.from),
                to: node_name(network, segment.to),
                mode: segment.mode,
                distance_km: segment.distance_km,
                time_hours: segment.time_hours,
                cost: segment.cost,
            })
            .collect();

        Self {
            segments,
            total_distance_km: path.total_distance_km(),
            total_time_hours: path.total_time_hours(),
            total_cost: path.total_cost(),
        }
    }

    /// Pretty-printed JSON document with the route under a `route` key.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(&json!({ "route": self })).unwrap_or_default()
    }
}

/// Human-readable itinerary, one line per leg plus a totals line.
pub fn format_route(network: &TransportNetwork, path: &RoutePath) -> String {
    if path.is_empty() {
        return String::from("Start and destination are the same place; nothing to travel.\n");
    }

    let mut out = String::from("--- Itinerary ---\n");
    for segment in path.segments() {
        out.push_str(&format!(
            "  {} --({})--> {}\n",
            node_name(network, segment.from),
            segment.mode.display_name(),
            node_name(network, segment.to),
        ));
    }
    out.push_str(&format!(
        "--- Totals: {:.1} km, {:.2} h, cost {:.2} ---\n",
        path.total_distance_km(),
        path.total_time_hours(),
        path.total_cost(),
    ));
    out
}
