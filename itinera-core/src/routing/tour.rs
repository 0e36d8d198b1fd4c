//! Optimal closed tours over a small set of stops
//!
//! Held-Karp dynamic program over subsets. Leg costs come from the
//! shortest-path engine, so a tour leg may itself be a multi-segment
//! multi-modal route. Exponential in the number of stops, hence the
//! hard size gate.

use crate::error::Error;
use crate::model::{NodeId, TransportNetwork};
use crate::routing::dijkstra::{shortest_path, validate_weight};
use crate::routing::path::RoutePath;

/// Hard upper bound on tour size; the subset table doubles per stop.
pub const MAX_TOUR_STOPS: usize = 10;

fn tour_leg(
    network: &TransportNetwork,
    from: NodeId,
    to: NodeId,
    time_weight: f64,
    cost_weight: f64,
) -> Result<RoutePath, Error> {
    match shortest_path(network, from, to, time_weight, cost_weight)? {
        Some(leg) => Ok(leg),
        // A leg is only reconstructed when its matrix entry was
        // finite, and the network cannot change between the calls.
        None => unreachable!("finite tour leg is routable"),
    }
}

/// Cheapest closed tour visiting every stop exactly once, starting and
/// ending at `stops[0]`.
///
/// Accepts 2 to [`MAX_TOUR_STOPS`] stops; larger inputs are rejected,
/// never truncated. `Ok(None)` means no closed tour connects all the
/// stops. Duplicate stops make their mutual legs degenerate, which
/// also yields `Ok(None)`.
pub fn solve_tour(
    network: &TransportNetwork,
    stops: &[NodeId],
    time_weight: f64,
    cost_weight: f64,
) -> Result<Option<RoutePath>, Error> {
    let n = stops.len();
    if n < 2 {
        return Err(Error::TourTooSmall(n));
    }
    if n > MAX_TOUR_STOPS {
        return Err(Error::TourTooLarge {
            got: n,
            limit: MAX_TOUR_STOPS,
        });
    }
    for &stop in stops {
        network.validate_node(stop)?;
    }
    validate_weight(time_weight)?;
    validate_weight(cost_weight)?;

    // Pairwise leg costs through the routing engine. Unreachable pairs
    // and degenerate zero-distance legs stay at infinity.
    let costing = network.costing();
    let mut cost = vec![vec![f64::INFINITY; n]; n];
    for i in 0..n {
        cost[i][i] = 0.0;
        for j in 0..n {
            if i == j {
                continue;
            }
            if let Some(leg) = shortest_path(network, stops[i], stops[j], time_weight, cost_weight)?
            {
                if leg.total_distance_km() > 0.0 {
                    cost[i][j] = costing.weighted_cost(
                        leg.total_time_hours(),
                        leg.total_cost(),
                        time_weight,
                        cost_weight,
                    );
                }
            }
        }
    }

    // dp[mask][i]: cheapest way to start at stop 0, visit exactly the
    // stops in `mask` and stand at stop i. Bit 0 is always set.
    let full = (1_usize << n) - 1;
    let mut dp = vec![vec![f64::INFINITY; n]; full + 1];
    let mut parent: Vec<Vec<Option<usize>>> = vec![vec![None; n]; full + 1];
    dp[1][0] = 0.0;

    for mask in 1..=full {
        if mask & 1 == 0 {
            continue;
        }
        for last in 0..n {
            if mask & (1 << last) == 0 || dp[mask][last].is_infinite() {
                continue;
            }
            let here = dp[mask][last];
            for next in 0..n {
                if mask & (1 << next) != 0 || cost[last][next].is_infinite() {
                    continue;
                }
                let tentative = here + cost[last][next];
                let extended = mask | (1 << next);
                if tentative < dp[extended][next] {
                    dp[extended][next] = tentative;
                    parent[extended][next] = Some(last);
                }
            }
        }
    }

    // Close the cycle back to stop 0
    let mut tour_end: Option<usize> = None;
    let mut tour_cost = f64::INFINITY;
    for last in 1..n {
        if dp[full][last].is_infinite() || cost[last][0].is_infinite() {
            continue;
        }
        let total = dp[full][last] + cost[last][0];
        if total < tour_cost {
            tour_cost = total;
            tour_end = Some(last);
        }
    }
    let Some(tour_end) = tour_end else {
        return Ok(None);
    };

    // Visiting order from the backpointers, ending at the start stop
    let mut order = Vec::with_capacity(n);
    let mut mask = full;
    let mut at = tour_end;
    loop {
        order.push(at);
        match parent[mask][at] {
            Some(prev) => {
                mask &= !(1 << at);
                at = prev;
            }
            None => break,
        }
    }
    order.reverse();

    // Stitch the closing leg first, then each tour leg walking
    // backwards, so the route grows from its tail.
    let mut route = tour_leg(network, stops[tour_end], stops[0], time_weight, cost_weight)?;
    for j in (0..order.len() - 1).rev() {
        let leg = tour_leg(
            network,
            stops[order[j]],
            stops[order[j + 1]],
            time_weight,
            cost_weight,
        )?;
        route.prepend(leg);
    }

    Ok(Some(route))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NetworkBuilder, NodeKind};

    fn triangle() -> TransportNetwork {
        let mut builder = NetworkBuilder::new();
        builder.add_node("Aville", NodeKind::Landmark, "Aville Square", 0.0, 0.0);
        builder.add_node("Btown", NodeKind::Landmark, "Btown Square", 0.0, 1.0);
        builder.add_node("Cburg", NodeKind::Landmark, "Cburg Square", 0.8, 0.5);
        builder.build()
    }

    #[test]
    fn undersized_and_oversized_tours_are_rejected() {
        let network = triangle();
        assert!(matches!(
            solve_tour(&network, &[0], 1.0, 1.0),
            Err(Error::TourTooSmall(1))
        ));

        let eleven = vec![0; 11];
        assert!(matches!(
            solve_tour(&network, &eleven, 1.0, 1.0),
            Err(Error::TourTooLarge { got: 11, limit: 10 })
        ));
    }

    #[test]
    fn unknown_stops_are_rejected() {
        let network = triangle();
        assert!(matches!(
            solve_tour(&network, &[0, 7], 1.0, 1.0),
            Err(Error::InvalidNode(7))
        ));
    }

    #[test]
    fn triangle_tour_visits_everything_and_closes() {
        let network = triangle();
        let tour = solve_tour(&network, &[0, 1, 2], 1.0, 1.0)
            .unwrap()
            .unwrap();

        assert!(tour.is_contiguous());
        assert_eq!(tour.start(), Some(0));
        assert_eq!(tour.end(), Some(0));

        let mut visited: Vec<_> = tour.segments().iter().map(|s| s.from).collect();
        visited.sort_unstable();
        assert_eq!(visited, vec![0, 1, 2]);
    }

    #[test]
    fn duplicate_stops_make_the_tour_unreachable() {
        let network = triangle();
        let result = solve_tour(&network, &[0, 1, 1], 1.0, 1.0).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn an_isolated_stop_makes_the_tour_unreachable() {
        // Dtown only has an airport; nothing can reach it from the
        // landmark-only cities.
        let mut builder = NetworkBuilder::new();
        builder.add_node("Aville", NodeKind::Landmark, "Aville Square", 0.0, 0.0);
        builder.add_node("Btown", NodeKind::Landmark, "Btown Square", 0.0, 1.0);
        builder.add_node("Dtown", NodeKind::Airport, "Dtown Intl", 1.0, 2.0);
        let network = builder.build();

        let result = solve_tour(&network, &[0, 1, 2], 1.0, 1.0).unwrap();
        assert!(result.is_none());
    }
}
