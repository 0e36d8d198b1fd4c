//! Transport network arena and its builder

use geo::Point;
use hashbrown::HashMap;
use log::info;

use super::types::{City, CityId, Node, NodeId, NodeKind};
use crate::costing::CostModel;
use crate::error::Error;

/// Immutable multi-modal network: node and city arenas plus the cost
/// model the routing engine prices edges with. Built once through
/// [`NetworkBuilder`], queried read-only afterwards.
#[derive(Debug, Clone)]
pub struct TransportNetwork {
    pub(crate) nodes: Vec<Node>,
    pub(crate) cities: Vec<City>,
    pub(crate) costing: CostModel,
}

impl TransportNetwork {
    /// check if such node exists
    pub(crate) fn validate_node(&self, node: NodeId) -> Result<(), Error> {
        if node >= self.nodes.len() {
            Err(Error::InvalidNode(node))
        } else {
            Ok(())
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    /// First node whose name matches exactly, linear scan.
    pub fn find_node_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|node| node.name == name)
    }

    pub fn find_city_by_name(&self, name: &str) -> Option<CityId> {
        self.cities.iter().position(|city| city.name == name)
    }

    pub fn costing(&self) -> &CostModel {
        &self.costing
    }
}

/// Incremental construction of a [`TransportNetwork`]. Cities are
/// created on first mention and keyed by name.
#[derive(Debug)]
pub struct NetworkBuilder {
    nodes: Vec<Node>,
    cities: Vec<City>,
    city_index: HashMap<String, CityId>,
    costing: CostModel,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::with_costing(CostModel::default())
    }

    pub fn with_costing(costing: CostModel) -> Self {
        Self {
            nodes: Vec::new(),
            cities: Vec::new(),
            city_index: HashMap::new(),
            costing,
        }
    }

    /// Append a node, creating its city if needed. The first node of
    /// each kind registered for a city becomes that city's
    /// representative for the kind.
    pub fn add_node(
        &mut self,
        city_name: &str,
        kind: NodeKind,
        node_name: &str,
        lat: f64,
        lon: f64,
    ) -> NodeId {
        let city_id = match self.city_index.get(city_name) {
            Some(&id) => id,
            None => {
                let id = self.cities.len();
                self.cities.push(City {
                    id,
                    name: city_name.to_string(),
                    landmark: None,
                    airport: None,
                    hsr_station: None,
                });
                self.city_index.insert(city_name.to_string(), id);
                id
            }
        };

        let node_id = self.nodes.len();
        self.nodes.push(Node {
            id: node_id,
            city: city_id,
            kind,
            name: node_name.to_string(),
            geometry: Point::new(lon, lat),
        });

        let city = &mut self.cities[city_id];
        let slot = match kind {
            NodeKind::Landmark => &mut city.landmark,
            NodeKind::Airport => &mut city.airport,
            NodeKind::HsrStation => &mut city.hsr_station,
        };
        if slot.is_none() {
            *slot = Some(node_id);
        }

        node_id
    }

    pub fn build(self) -> TransportNetwork {
        info!(
            "Transport network built: {} nodes in {} cities",
            self.nodes.len(),
            self.cities.len()
        );
        TransportNetwork {
            nodes: self.nodes,
            cities: self.cities,
            costing: self.costing,
        }
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_network() -> TransportNetwork {
        let mut builder = NetworkBuilder::new();
        builder.add_node("Aville", NodeKind::Landmark, "Aville Center", 30.0, 110.0);
        builder.add_node("Aville", NodeKind::Airport, "Aville Intl", 30.1, 110.2);
        builder.add_node("Aville", NodeKind::Airport, "Aville Old Field", 30.2, 110.3);
        builder.add_node("Btown", NodeKind::HsrStation, "Btown East", 32.0, 114.0);
        builder.build()
    }

    #[test]
    fn cities_are_created_on_first_mention() {
        let network = sample_network();
        assert_eq!(network.city_count(), 2);
        assert_eq!(network.node_count(), 4);
        assert_eq!(network.find_city_by_name("Aville"), Some(0));
        assert_eq!(network.find_city_by_name("Btown"), Some(1));
    }

    #[test]
    fn first_node_of_a_kind_becomes_representative() {
        let network = sample_network();
        let aville = network.city(0).unwrap();
        assert_eq!(aville.representative(NodeKind::Airport), Some(1));
        assert_eq!(aville.representative(NodeKind::Landmark), Some(0));
        assert_eq!(aville.representative(NodeKind::HsrStation), None);
    }

    #[test]
    fn nodes_are_found_by_exact_name() {
        let network = sample_network();
        assert_eq!(network.find_node_by_name("Btown East"), Some(3));
        assert_eq!(network.find_node_by_name("Btown"), None);
    }

    #[test]
    fn out_of_range_ids_are_rejected() {
        let network = sample_network();
        assert!(network.validate_node(3).is_ok());
        assert!(matches!(
            network.validate_node(4),
            Err(Error::InvalidNode(4))
        ));
    }
}
