//! Shortest-path search over the implicit complete graph
//!
//! There is no stored edge list: any ordered pair of nodes far enough
//! apart is an edge candidate, priced on demand by the cost model with
//! the cheapest legal mode. Node counts are small, so the search is a
//! plain Dijkstra with a dense linear minimum scan.

use fixedbitset::FixedBitSet;

use crate::costing::CostModel;
use crate::distance::haversine_km;
use crate::error::Error;
use crate::model::{Node, NodeId, TransportMode, TransportNetwork};
use crate::routing::path::{PathSegment, RoutePath};

pub(crate) fn validate_weight(weight: f64) -> Result<(), Error> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidWeight(weight))
    }
}

/// Cheapest legal mode for one candidate edge, with its scalar cost
/// under the given weights.
fn cheapest_leg(
    costing: &CostModel,
    distance_km: f64,
    from: &Node,
    to: &Node,
    time_weight: f64,
    cost_weight: f64,
) -> Option<(TransportMode, f64)> {
    let mut best: Option<(TransportMode, f64)> = None;
    for &mode in &TransportMode::ALL {
        if let Some(info) = costing.evaluate(distance_km, mode, from, to) {
            let scalar = costing.weighted_cost(info.time_hours, info.cost, time_weight, cost_weight);
            if best.is_none_or(|(_, current)| scalar < current) {
                best = Some((mode, scalar));
            }
        }
    }
    best
}

/// Cheapest route between two nodes under the given time/cost weights.
///
/// `Ok(None)` means the destination exists but cannot be reached; a
/// trip from a node to itself is the empty route. Ties in the minimum
/// scan keep the lowest node id, so results are deterministic.
pub fn shortest_path(
    network: &TransportNetwork,
    start: NodeId,
    end: NodeId,
    time_weight: f64,
    cost_weight: f64,
) -> Result<Option<RoutePath>, Error> {
    network.validate_node(start)?;
    network.validate_node(end)?;
    validate_weight(time_weight)?;
    validate_weight(cost_weight)?;

    if start == end {
        return Ok(Some(RoutePath::empty()));
    }

    let n = network.node_count();
    let costing = network.costing();

    let mut best = vec![f64::INFINITY; n];
    let mut predecessor: Vec<Option<(NodeId, TransportMode)>> = vec![None; n];
    let mut visited = FixedBitSet::with_capacity(n);
    best[start] = 0.0;

    loop {
        // Unvisited node with the smallest tentative cost
        let mut current: Option<NodeId> = None;
        let mut current_cost = f64::INFINITY;
        for candidate in 0..n {
            if !visited.contains(candidate) && best[candidate] < current_cost {
                current = Some(candidate);
                current_cost = best[candidate];
            }
        }

        // Frontier exhausted or target settled
        let Some(current) = current else { break };
        if current == end {
            break;
        }
        visited.insert(current);

        let from = &network.nodes[current];
        for next in 0..n {
            if visited.contains(next) {
                continue;
            }
            let to = &network.nodes[next];
            let distance_km = haversine_km(from.geometry, to.geometry);
            if distance_km <= costing.min_leg_distance_km {
                continue;
            }
            if let Some((mode, edge_cost)) =
                cheapest_leg(costing, distance_km, from, to, time_weight, cost_weight)
            {
                let tentative = current_cost + edge_cost;
                if tentative < best[next] {
                    best[next] = tentative;
                    predecessor[next] = Some((current, mode));
                }
            }
        }
    }

    if predecessor[end].is_none() {
        return Ok(None);
    }

    // Walk the predecessor chain back to the start, then rebuild the
    // route forward. Only the mode is stored per hop; time and cost
    // are re-derived from the cost model.
    let mut hops_reversed = Vec::new();
    let mut node = end;
    while let Some((prev, mode)) = predecessor[node] {
        hops_reversed.push((prev, node, mode));
        node = prev;
    }

    let mut path = RoutePath::empty();
    for (from_id, to_id, mode) in hops_reversed.into_iter().rev() {
        let from = &network.nodes[from_id];
        let to = &network.nodes[to_id];
        let distance_km = haversine_km(from.geometry, to.geometry);
        let Some(info) = costing.evaluate(distance_km, mode, from, to) else {
            unreachable!("stored predecessor mode prices its own leg")
        };
        path.push_segment(PathSegment {
            from: from_id,
            to: to_id,
            mode,
            distance_km,
            time_hours: info.time_hours,
            cost: info.cost,
        });
    }

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NetworkBuilder, NodeKind};
    use approx::assert_relative_eq;

    // Two landmark-only cities one equator degree apart (~111 km)
    fn two_cities() -> TransportNetwork {
        let mut builder = NetworkBuilder::new();
        builder.add_node("Aville", NodeKind::Landmark, "Aville Square", 0.0, 0.0);
        builder.add_node("Btown", NodeKind::Landmark, "Btown Square", 0.0, 1.0);
        builder.build()
    }

    #[test]
    fn trip_to_self_is_the_empty_route() {
        let network = two_cities();
        let path = shortest_path(&network, 0, 0, 1.0, 1.0).unwrap().unwrap();
        assert!(path.is_empty());
        assert_relative_eq!(path.total_cost(), 0.0);
    }

    #[test]
    fn direct_leg_between_landmarks() {
        let network = two_cities();
        let path = shortest_path(&network, 0, 1, 1.0, 1.0).unwrap().unwrap();
        assert_eq!(path.segment_count(), 1);
        assert!(path.is_contiguous());
        assert_eq!(path.start(), Some(0));
        assert_eq!(path.end(), Some(1));
        assert!(path.total_distance_km() > 110.0 && path.total_distance_km() < 112.0);
    }

    #[test]
    fn weights_flip_the_chosen_road_mode() {
        let network = two_cities();

        let fastest = shortest_path(&network, 0, 1, 1.0, 0.0).unwrap().unwrap();
        assert_eq!(fastest.segments()[0].mode, TransportMode::Driving);

        let cheapest = shortest_path(&network, 0, 1, 0.0, 1.0).unwrap().unwrap();
        assert_eq!(cheapest.segments()[0].mode, TransportMode::Bus);
    }

    #[test]
    fn no_legal_mode_means_no_route() {
        // An airport and a rail station in different cities share no
        // legal mode.
        let mut builder = NetworkBuilder::new();
        builder.add_node("Aville", NodeKind::Airport, "Aville Intl", 0.0, 0.0);
        builder.add_node("Btown", NodeKind::HsrStation, "Btown East", 0.0, 1.0);
        let network = builder.build();

        let result = shortest_path(&network, 0, 1, 1.0, 1.0).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn invalid_ids_and_weights_are_rejected() {
        let network = two_cities();
        assert!(matches!(
            shortest_path(&network, 0, 99, 1.0, 1.0),
            Err(Error::InvalidNode(99))
        ));
        assert!(matches!(
            shortest_path(&network, 0, 1, -1.0, 1.0),
            Err(Error::InvalidWeight(_))
        ));
        assert!(matches!(
            shortest_path(&network, 0, 1, 1.0, f64::NAN),
            Err(Error::InvalidWeight(_))
        ));
    }

    #[test]
    fn nodes_closer_than_the_minimum_leg_are_not_connected() {
        // 0.0008 degrees is roughly 90 m, below the 0.1 km floor
        let mut builder = NetworkBuilder::new();
        builder.add_node("Aville", NodeKind::Landmark, "Aville Square", 0.0, 0.0);
        builder.add_node("Aville", NodeKind::Airport, "Aville Intl", 0.0, 0.0008);
        let network = builder.build();

        let result = shortest_path(&network, 0, 1, 1.0, 1.0).unwrap();
        assert!(result.is_none());
    }
}
