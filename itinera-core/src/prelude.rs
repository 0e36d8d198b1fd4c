pub use crate::Error;

// Re-export key components
pub use crate::costing::{CostModel, ModeCosting, TravelInfo};
pub use crate::distance::haversine_km;
pub use crate::loading::{
    builtin_network, builtin_network_with_costing, load_network, load_network_with_costing,
    network_or_builtin,
};
pub use crate::output::{
    RouteReport, SegmentReport, format_route, render_leaflet_map, route_to_geojson,
    route_to_geojson_string, write_leaflet_map,
};
pub use crate::routing::{MAX_TOUR_STOPS, PathSegment, RoutePath, shortest_path, solve_tour};

// Core types for the network model
pub use crate::model::{NetworkBuilder, TransportNetwork};
pub use crate::model::{CityId, NodeId, NodeKind, TransportMode};
