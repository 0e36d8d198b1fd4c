//! Rendering of computed routes: plain text, JSON, GeoJSON and a
//! self-contained Leaflet map

mod map;
mod report;
mod to_geojson;

pub use map::{render_leaflet_map, write_leaflet_map};
pub use report::{RouteReport, SegmentReport, format_route};
pub use to_geojson::{route_to_geojson, route_to_geojson_string};
