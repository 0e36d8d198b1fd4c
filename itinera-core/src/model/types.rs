//! Basic vocabulary of the transport network

use geo::Point;
use serde::{Deserialize, Serialize};

/// Dense index of a node in the network arena
pub type NodeId = usize;
/// Dense index of a city in the network arena
pub type CityId = usize;

/// What a node physically is. Mode legality is decided from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Landmark,
    Airport,
    HsrStation,
}

impl NodeKind {
    /// Parse a node type tag as it appears in the CSV.
    /// "railway" is accepted as a legacy synonym for "hsr".
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "landmark" => Some(Self::Landmark),
            "airport" => Some(Self::Airport),
            "hsr" | "railway" => Some(Self::HsrStation),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Landmark => "landmark",
            Self::Airport => "airport",
            Self::HsrStation => "hsr",
        }
    }
}

/// Travel modes the cost model knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Driving,
    HighSpeedRail,
    Flight,
    Bus,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Driving,
        TransportMode::HighSpeedRail,
        TransportMode::Flight,
        TransportMode::Bus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::HighSpeedRail => "high_speed_rail",
            Self::Flight => "flight",
            Self::Bus => "bus",
        }
    }

    /// Human-readable name for reports and map legends.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Driving => "Driving",
            Self::HighSpeedRail => "High-speed rail",
            Self::Flight => "Flight",
            Self::Bus => "Bus",
        }
    }
}

/// A place a route can pass through: a city landmark, an airport
/// or a high-speed-rail station
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub city: CityId,
    pub kind: NodeKind,
    pub name: String,
    pub geometry: Point<f64>,
}

/// A city groups its nodes and remembers one representative per kind
#[derive(Debug, Clone)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub landmark: Option<NodeId>,
    pub airport: Option<NodeId>,
    pub hsr_station: Option<NodeId>,
}

impl City {
    pub fn representative(&self, kind: NodeKind) -> Option<NodeId> {
        match kind {
            NodeKind::Landmark => self.landmark,
            NodeKind::Airport => self.airport,
            NodeKind::HsrStation => self.hsr_station,
        }
    }
}
