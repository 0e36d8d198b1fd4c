//! Route container shared by the shortest-path engine and the tour
//! solver

use itertools::Itertools;

use crate::model::{NodeId, TransportMode};

/// One leg of a route, priced for the mode it was taken with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegment {
    pub from: NodeId,
    pub to: NodeId,
    pub mode: TransportMode,
    pub distance_km: f64,
    pub time_hours: f64,
    pub cost: f64,
}

/// An ordered list of contiguous segments with cached totals.
///
/// The empty route (no segments, zero totals) is the canonical answer
/// for a trip from a node to itself. Totals always equal the sums over
/// the segments; they are maintained on every mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutePath {
    segments: Vec<PathSegment>,
    total_distance_km: f64,
    total_time_hours: f64,
    total_cost: f64,
}

impl RoutePath {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn push_segment(&mut self, segment: PathSegment) {
        self.total_distance_km += segment.distance_km;
        self.total_time_hours += segment.time_hours;
        self.total_cost += segment.cost;
        self.segments.push(segment);
    }

    /// Splice another route in front of this one, folding its totals
    /// in. The donor is consumed.
    pub fn prepend(&mut self, leg: RoutePath) {
        self.total_distance_km += leg.total_distance_km;
        self.total_time_hours += leg.total_time_hours;
        self.total_cost += leg.total_cost;
        self.segments.splice(0..0, leg.segments);
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    pub fn total_time_hours(&self) -> f64 {
        self.total_time_hours
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Every segment starts where the previous one ended.
    pub fn is_contiguous(&self) -> bool {
        self.segments
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.to == b.from)
    }

    /// First node of the route, if any.
    pub fn start(&self) -> Option<NodeId> {
        self.segments.first().map(|segment| segment.from)
    }

    /// Last node of the route, if any.
    pub fn end(&self) -> Option<NodeId> {
        self.segments.last().map(|segment| segment.to)
    }
}
