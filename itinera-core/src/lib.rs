//! Multi-modal intercity route planning.
//!
//! The network is a flat arena of nodes (landmarks, airports,
//! high-speed-rail stations) grouped into cities. There is no stored
//! edge list: any pair of nodes is a candidate leg, priced on demand
//! by a tunable cost model that also decides which travel modes are
//! legal between them. On top of that sit a point-to-point
//! shortest-path query, an exact closed-tour solver for up to ten
//! stops, CSV loading with a built-in fallback dataset, and renderers
//! for text, JSON, GeoJSON and a self-contained Leaflet map.
//!
//! ```
//! use itinera_core::prelude::*;
//!
//! fn main() -> Result<(), itinera_core::Error> {
//!     let network = builtin_network();
//!     let start = network.find_node_by_name("Forbidden City").unwrap();
//!     let end = network.find_node_by_name("The Bund").unwrap();
//!
//!     if let Some(route) = shortest_path(&network, start, end, 0.5, 0.5)? {
//!         println!("{}", format_route(&network, &route));
//!     }
//!     Ok(())
//! }
//! ```

pub mod costing;
pub mod distance;
mod error;
pub mod loading;
pub mod model;
pub mod output;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{CityId, NodeId};
