//! Pricing and legality of a single leg between two nodes
//!
//! Every ordered node pair is a potential edge for every mode; this
//! module decides which (pair, mode) combinations are legal and what
//! they cost. All constants live in [`CostModel`] so they can be tuned
//! per network rather than recompiled.

use serde::{Deserialize, Serialize};

use crate::model::{Node, NodeKind, TransportMode};

/// Time and monetary cost of one leg. Absence of a `TravelInfo`
/// (an `Option::None` from [`CostModel::evaluate`]) means the leg is
/// not legal for that mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelInfo {
    pub time_hours: f64,
    pub cost: f64,
}

/// Speed and fare table for one mode. Speeds must be positive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModeCosting {
    pub intercity_kmh: f64,
    pub intracity_kmh: f64,
    pub cost_per_km: f64,
}

/// Tunable constants of the reachability and cost model.
///
/// The defaults are the calibrated intercity table: driving 60 km/h at
/// 0.8 per km, high-speed rail 250 km/h at 0.4, flight 800 km/h at
/// 0.6, bus 40 km/h at 0.2 with a 1.5x surcharge beyond 300 km.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostModel {
    pub driving: ModeCosting,
    pub high_speed_rail: ModeCosting,
    pub flight: ModeCosting,
    pub bus: ModeCosting,
    /// Bus legs longer than this get the surcharge factor applied
    pub bus_surcharge_threshold_km: f64,
    pub bus_surcharge_factor: f64,
    /// Node pairs closer than this are not offered to the search
    pub min_leg_distance_km: f64,
    /// Assumed diameter of the covered region, used to derive the
    /// normalization estimates for weighted costs
    pub assumed_diameter_km: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            driving: ModeCosting {
                intercity_kmh: 60.0,
                intracity_kmh: 60.0,
                cost_per_km: 0.8,
            },
            high_speed_rail: ModeCosting {
                intercity_kmh: 250.0,
                intracity_kmh: 250.0,
                cost_per_km: 0.4,
            },
            flight: ModeCosting {
                intercity_kmh: 800.0,
                intracity_kmh: 800.0,
                cost_per_km: 0.6,
            },
            bus: ModeCosting {
                intercity_kmh: 40.0,
                intracity_kmh: 40.0,
                cost_per_km: 0.2,
            },
            bus_surcharge_threshold_km: 300.0,
            bus_surcharge_factor: 1.5,
            min_leg_distance_km: 0.1,
            assumed_diameter_km: 6000.0,
        }
    }
}

impl CostModel {
    pub fn mode(&self, mode: TransportMode) -> &ModeCosting {
        match mode {
            TransportMode::Driving => &self.driving,
            TransportMode::HighSpeedRail => &self.high_speed_rail,
            TransportMode::Flight => &self.flight,
            TransportMode::Bus => &self.bus,
        }
    }

    /// Price one leg. Returns `None` when the mode is not legal
    /// between these two nodes:
    ///
    /// - flight needs two airports in different cities,
    /// - high-speed rail needs two stations in different cities,
    /// - driving and bus connect landmarks of different cities, or
    ///   nodes of different kinds inside one city.
    pub fn evaluate(
        &self,
        distance_km: f64,
        mode: TransportMode,
        from: &Node,
        to: &Node,
    ) -> Option<TravelInfo> {
        let same_city = from.city == to.city;

        let legal = match mode {
            TransportMode::Flight => {
                !same_city && from.kind == NodeKind::Airport && to.kind == NodeKind::Airport
            }
            TransportMode::HighSpeedRail => {
                !same_city && from.kind == NodeKind::HsrStation && to.kind == NodeKind::HsrStation
            }
            TransportMode::Driving | TransportMode::Bus => {
                if same_city {
                    from.kind != to.kind
                } else {
                    from.kind == NodeKind::Landmark && to.kind == NodeKind::Landmark
                }
            }
        };
        if !legal {
            return None;
        }

        let costing = self.mode(mode);
        let speed = if same_city {
            costing.intracity_kmh
        } else {
            costing.intercity_kmh
        };

        let mut cost = distance_km * costing.cost_per_km;
        if mode == TransportMode::Bus && distance_km > self.bus_surcharge_threshold_km {
            cost *= self.bus_surcharge_factor;
        }

        Some(TravelInfo {
            time_hours: distance_km / speed,
            cost,
        })
    }

    /// Upper estimate of a single trip's time: the assumed diameter
    /// covered at the slowest intercity speed.
    pub fn max_time_estimate(&self) -> f64 {
        let slowest = TransportMode::ALL
            .iter()
            .map(|&mode| self.mode(mode).intercity_kmh)
            .fold(f64::INFINITY, f64::min);
        self.assumed_diameter_km / slowest
    }

    /// Upper estimate of a single trip's cost: the assumed diameter
    /// at the priciest per-km rate.
    pub fn max_cost_estimate(&self) -> f64 {
        let priciest = TransportMode::ALL
            .iter()
            .map(|&mode| self.mode(mode).cost_per_km)
            .fold(0.0, f64::max);
        self.assumed_diameter_km * priciest
    }

    /// Scalar objective: both terms normalized to the trip estimates,
    /// then weighted. Weights are relative multipliers and need not
    /// sum to one.
    pub fn weighted_cost(
        &self,
        time_hours: f64,
        cost: f64,
        time_weight: f64,
        cost_weight: f64,
    ) -> f64 {
        (time_hours / self.max_time_estimate()) * time_weight
            + (cost / self.max_cost_estimate()) * cost_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CityId, NodeId};
    use approx::assert_relative_eq;
    use geo::Point;

    fn node(id: NodeId, city: CityId, kind: NodeKind) -> Node {
        Node {
            id,
            city,
            kind,
            name: format!("node-{id}"),
            geometry: Point::new(0.0, 0.0),
        }
    }

    #[test]
    fn flight_needs_two_airports_in_different_cities() {
        let model = CostModel::default();
        let a = node(0, 0, NodeKind::Airport);
        let b = node(1, 1, NodeKind::Airport);
        let c = node(2, 1, NodeKind::Landmark);
        let d = node(3, 0, NodeKind::Airport);

        assert!(model.evaluate(500.0, TransportMode::Flight, &a, &b).is_some());
        assert!(model.evaluate(500.0, TransportMode::Flight, &a, &c).is_none());
        // same city
        assert!(model.evaluate(500.0, TransportMode::Flight, &a, &d).is_none());
    }

    #[test]
    fn rail_needs_two_stations_in_different_cities() {
        let model = CostModel::default();
        let a = node(0, 0, NodeKind::HsrStation);
        let b = node(1, 1, NodeKind::HsrStation);
        let c = node(2, 1, NodeKind::Airport);

        assert!(
            model
                .evaluate(500.0, TransportMode::HighSpeedRail, &a, &b)
                .is_some()
        );
        assert!(
            model
                .evaluate(500.0, TransportMode::HighSpeedRail, &a, &c)
                .is_none()
        );
    }

    #[test]
    fn road_modes_connect_landmarks_between_cities() {
        let model = CostModel::default();
        let a = node(0, 0, NodeKind::Landmark);
        let b = node(1, 1, NodeKind::Landmark);
        let c = node(2, 1, NodeKind::Airport);

        for mode in [TransportMode::Driving, TransportMode::Bus] {
            assert!(model.evaluate(100.0, mode, &a, &b).is_some());
            assert!(model.evaluate(100.0, mode, &a, &c).is_none());
        }
    }

    #[test]
    fn road_modes_connect_different_kinds_inside_a_city() {
        let model = CostModel::default();
        let landmark = node(0, 0, NodeKind::Landmark);
        let airport = node(1, 0, NodeKind::Airport);
        let airport2 = node(2, 0, NodeKind::Airport);

        for mode in [TransportMode::Driving, TransportMode::Bus] {
            assert!(model.evaluate(20.0, mode, &landmark, &airport).is_some());
            assert!(model.evaluate(20.0, mode, &airport, &airport2).is_none());
        }
    }

    #[test]
    fn time_and_cost_follow_the_table() {
        let model = CostModel::default();
        let a = node(0, 0, NodeKind::HsrStation);
        let b = node(1, 1, NodeKind::HsrStation);

        let info = model
            .evaluate(500.0, TransportMode::HighSpeedRail, &a, &b)
            .unwrap();
        assert_relative_eq!(info.time_hours, 2.0);
        assert_relative_eq!(info.cost, 200.0);
    }

    #[test]
    fn bus_surcharge_applies_strictly_beyond_the_threshold() {
        let model = CostModel::default();
        let a = node(0, 0, NodeKind::Landmark);
        let b = node(1, 1, NodeKind::Landmark);

        let at = model.evaluate(300.0, TransportMode::Bus, &a, &b).unwrap();
        assert_relative_eq!(at.cost, 60.0);

        let beyond = model.evaluate(301.0, TransportMode::Bus, &a, &b).unwrap();
        assert_relative_eq!(beyond.cost, 301.0 * 0.2 * 1.5);
    }

    #[test]
    fn estimates_derive_from_the_table() {
        let model = CostModel::default();
        assert_relative_eq!(model.max_time_estimate(), 150.0);
        assert_relative_eq!(model.max_cost_estimate(), 4800.0);
    }

    #[test]
    fn weighted_cost_is_linear_in_the_weights() {
        let model = CostModel::default();
        let base = model.weighted_cost(15.0, 480.0, 1.0, 1.0);
        assert_relative_eq!(base, 15.0 / 150.0 + 480.0 / 4800.0);
        assert_relative_eq!(model.weighted_cost(15.0, 480.0, 2.0, 0.0), 0.2);
    }
}
