//! GeoJSON rendering of a computed route

use fixedbitset::FixedBitSet;
use geo::LineString;
use geojson::{Feature, FeatureCollection, Geometry};
use serde_json::json;

use crate::model::{Node, TransportMode, TransportNetwork};
use crate::routing::{PathSegment, RoutePath};

/// Map colors per mode, also used by the Leaflet legend.
pub(crate) fn mode_color(mode: TransportMode) -> &'static str {
    match mode {
        TransportMode::Driving => "#4A90E2",
        TransportMode::HighSpeedRail => "#50E3C2",
        TransportMode::Flight => "#F5A623",
        TransportMode::Bus => "#7ED321",
    }
}

fn segment_to_feature(
    network: &TransportNetwork,
    segment: &PathSegment,
    leg_idx: usize,
) -> Option<Feature> {
    let from = network.node(segment.from)?;
    let to = network.node(segment.to)?;

    let linestring: LineString = vec![
        (from.geometry.x(), from.geometry.y()),
        (to.geometry.x(), to.geometry.y()),
    ]
    .into();

    let value = json!({
        "type": "Feature",
        "geometry": Geometry::new((&linestring).into()),
        "properties": {
            "leg_index": leg_idx,
            "mode": segment.mode.label(),
            "from_name": from.name,
            "to_name": to.name,
            "distance_km": segment.distance_km,
            "time_hours": segment.time_hours,
            "cost": segment.cost,
            "color": mode_color(segment.mode),
        }
    });

    serde_json::from_value(value).ok()
}

fn node_to_feature(network: &TransportNetwork, node: &Node) -> Option<Feature> {
    let city_name = network.city(node.city).map(|city| city.name.as_str());

    let value = json!({
        "type": "Feature",
        "geometry": Geometry::new((&node.geometry).into()),
        "properties": {
            "name": node.name,
            "kind": node.kind.label(),
            "city": city_name,
        }
    });

    serde_json::from_value(value).ok()
}

/// A `FeatureCollection` with one LineString per leg and one Point per
/// distinct node the route passes through.
pub fn route_to_geojson(network: &TransportNetwork, path: &RoutePath) -> FeatureCollection {
    let mut features = Vec::with_capacity(path.segment_count() * 2);

    for (leg_idx, segment) in path.segments().iter().enumerate() {
        features.extend(segment_to_feature(network, segment, leg_idx));
    }

    // Each visited node becomes one marker, duplicates skipped
    let mut drawn = FixedBitSet::with_capacity(network.node_count());
    for segment in path.segments() {
        for id in [segment.from, segment.to] {
            if drawn.contains(id) {
                continue;
            }
            drawn.insert(id);
            if let Some(node) = network.node(id) {
                features.extend(node_to_feature(network, node));
            }
        }
    }

    FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    }
}

pub fn route_to_geojson_string(network: &TransportNetwork, path: &RoutePath) -> String {
    let collection = route_to_geojson(network, path);
    serde_json::to_string(&collection).unwrap_or_default()
}
