//! Route search: point-to-point shortest paths and closed tours

mod dijkstra;
pub mod path;
mod tour;

pub use dijkstra::shortest_path;
pub use path::{PathSegment, RoutePath};
pub use tour::{MAX_TOUR_STOPS, solve_tour};
