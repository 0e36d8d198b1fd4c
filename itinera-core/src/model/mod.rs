//! Data model for the multi-modal transport network
//!
//! Contains the node/city arenas and the immutable network handle.

pub mod network;
pub mod types;

pub use network::{NetworkBuilder, TransportNetwork};
pub use types::{City, CityId, Node, NodeId, NodeKind, TransportMode};
