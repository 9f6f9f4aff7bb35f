// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for creating [`CircuitGraph`] instances from given components and
//! wires.

use std::collections::{BTreeMap, BTreeSet};

use petgraph::graph::{NodeIndex, UnGraph};

use crate::{component_kind::KindPredicates, CircuitGraphConfig, Edge, Error, Node};

use super::{CircuitGraph, EdgeMap, NodeIndexMap};

/// `CircuitGraph` instantiation.
impl<N, E> CircuitGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Creates a new [`CircuitGraph`] from the given components and wires.
    ///
    /// Returns an error if a component or a wire is invalid.
    pub fn try_new<NodeIterator: IntoIterator<Item = N>, EdgeIterator: IntoIterator<Item = E>>(
        components: NodeIterator,
        connections: EdgeIterator,
        config: CircuitGraphConfig,
    ) -> Result<Self, Error> {
        let (graph, indices) = Self::create_graph(components)?;

        let mut cg = Self {
            graph,
            node_indices: indices,
            edges: EdgeMap::new(),
            junctions: BTreeSet::new(),
            voltmeter_pairs: BTreeMap::new(),
            config,
        };
        cg.validate()?;

        for connection in connections {
            cg.add_edge(connection)?;
        }

        Ok(cg)
    }

    fn create_graph(
        components: impl IntoIterator<Item = N>,
    ) -> Result<(UnGraph<N, ()>, NodeIndexMap), Error> {
        let mut graph = UnGraph::new_undirected();
        let mut indices = NodeIndexMap::new();

        for component in components {
            let cid = component.component_id();

            if cid == 0 {
                return Err(Error::invalid_component(format!(
                    "{} has an invalid component ID: 0",
                    component.kind()
                )));
            }
            if indices.contains_key(&cid) {
                return Err(Error::invalid_graph(format!(
                    "Duplicate component ID found: {cid}"
                )));
            }

            let idx = graph.add_node(component);
            indices.insert(cid, idx);
        }

        Ok((graph, indices))
    }

    /// Adds a wire to the graph.
    ///
    /// Adding the same wire twice, in either direction, has no further
    /// effect.  A wire to a voltmeter records the component the voltmeter
    /// measures, instead of connecting the two in the graph.
    pub fn add_edge(&mut self, connection: E) -> Result<(), Error> {
        let sid = connection.source();
        let did = connection.destination();

        if sid == did {
            return Err(Error::invalid_connection(format!(
                "Connection:({sid}, {did}) Can't connect a component to itself."
            )));
        }
        for cid in [sid, did] {
            if !self.node_indices.contains_key(&cid) {
                return Err(Error::invalid_connection(format!(
                    "Connection:({sid}, {did}) Can't find a component with ID {cid}"
                )));
            }
        }

        let source_idx = self.node_indices[&sid];
        let dest_idx = self.node_indices[&did];

        match (
            self.graph[source_idx].is_voltmeter(),
            self.graph[dest_idx].is_voltmeter(),
        ) {
            (true, true) => Err(Error::invalid_connection(format!(
                "Connection:({sid}, {did}) Can't connect a voltmeter to another voltmeter."
            ))),
            (true, false) => self.add_voltmeter_pair(sid, did),
            (false, true) => self.add_voltmeter_pair(did, sid),
            (false, false) => {
                if connection.is_parallel_junction() {
                    self.junctions.extend([sid, did]);
                }
                self.graph.update_edge(source_idx, dest_idx, ());
                self.edges
                    .entry(Self::edge_key(source_idx, dest_idx))
                    .or_insert(connection);
                Ok(())
            }
        }
    }

    fn add_voltmeter_pair(&mut self, voltmeter_id: u64, measured_id: u64) -> Result<(), Error> {
        match self.voltmeter_pairs.get(&voltmeter_id) {
            Some(existing) if *existing != measured_id => Err(Error::invalid_connection(format!(
                "Connection:({voltmeter_id}, {measured_id}) Voltmeter {voltmeter_id} already measures component {existing}."
            ))),
            _ => {
                self.voltmeter_pairs.insert(voltmeter_id, measured_id);
                Ok(())
            }
        }
    }

    pub(crate) fn edge_key(a: NodeIndex, b: NodeIndex) -> (NodeIndex, NodeIndex) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_utils::{TestComponent, TestConnection};
    use crate::ComponentKind;

    fn nodes_and_edges() -> (Vec<TestComponent>, Vec<TestConnection>) {
        let components = vec![
            TestComponent::new(1, ComponentKind::Battery { volts: 10.0 }),
            TestComponent::new(2, ComponentKind::Resistor { ohms: 10.0 }),
            TestComponent::new(3, ComponentKind::Ammeter),
        ];
        let connections = vec![
            TestConnection::new(1, 2),
            TestConnection::new(2, 3),
            TestConnection::new(3, 1),
        ];

        (components, connections)
    }

    #[test]
    fn test_component_validation() {
        let config = CircuitGraphConfig::default();
        let (mut components, connections) = nodes_and_edges();

        assert!(
            CircuitGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_ok()
        );

        components.push(TestComponent::new(2, ComponentKind::Lightbulb));
        assert!(
            CircuitGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_err_and(|e| e == Error::invalid_graph("Duplicate component ID found: 2"))
        );

        components.pop();
        components.push(TestComponent::new(0, ComponentKind::Lightbulb));
        assert!(
            CircuitGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_err_and(
                    |e| e == Error::invalid_component("Lightbulb has an invalid component ID: 0")
                )
        );

        components.pop();
        assert!(
            CircuitGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_ok()
        );
    }

    #[test]
    fn test_connection_validation() {
        let config = CircuitGraphConfig::default();
        let (mut components, mut connections) = nodes_and_edges();

        connections.push(TestConnection::new(2, 2));
        assert!(
            CircuitGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_err_and(|e| e
                    == Error::invalid_connection(
                        "Connection:(2, 2) Can't connect a component to itself."
                    ))
        );

        connections.pop();
        connections.push(TestConnection::new(2, 9));
        assert!(
            CircuitGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_err_and(|e| e
                    == Error::invalid_connection(
                        "Connection:(2, 9) Can't find a component with ID 9"
                    ))
        );

        connections.pop();
        components.push(TestComponent::new(4, ComponentKind::Voltmeter));
        components.push(TestComponent::new(5, ComponentKind::Voltmeter));
        connections.push(TestConnection::new(4, 5));
        assert!(
            CircuitGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_err_and(|e| e
                    == Error::invalid_connection(
                        "Connection:(4, 5) Can't connect a voltmeter to another voltmeter."
                    ))
        );

        connections.pop();
        connections.push(TestConnection::new(4, 2));
        connections.push(TestConnection::new(2, 4));
        assert!(
            CircuitGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_ok()
        );

        connections.push(TestConnection::new(3, 4));
        assert!(
            CircuitGraph::try_new(components.clone(), connections.clone(), config.clone())
                .is_err_and(|e| e
                    == Error::invalid_connection(
                        "Connection:(4, 3) Voltmeter 4 already measures component 2."
                    ))
        );
    }

    #[test]
    fn test_add_edge() -> Result<(), Error> {
        let (components, connections) = nodes_and_edges();
        let mut graph =
            CircuitGraph::try_new(components, connections, CircuitGraphConfig::default())?;

        // Adding an existing wire, in either direction, is a no-op.
        graph.add_edge(TestConnection::new(1, 2))?;
        graph.add_edge(TestConnection::new(2, 1))?;
        assert_eq!(graph.connections().count(), 3);
        assert_eq!(graph.degree(1)?, 2);
        assert_eq!(graph.degree(2)?, 2);

        // Wires are symmetric.
        for id in graph.nodes() {
            for neighbor in graph.neighbor_ids(id)? {
                assert!(graph.neighbor_ids(neighbor)?.contains(&id));
            }
        }

        Ok(())
    }

    #[test]
    fn test_voltmeter_wires() -> Result<(), Error> {
        let (mut components, mut connections) = nodes_and_edges();
        components.push(TestComponent::new(4, ComponentKind::Voltmeter));
        connections.push(TestConnection::new(2, 4));

        let graph = CircuitGraph::try_new(components, connections, CircuitGraphConfig::default())?;

        assert_eq!(graph.degree(4)?, 0);
        assert!(!graph.nodes().contains(&4));
        assert_eq!(graph.voltmeter_pairs().collect::<Vec<_>>(), vec![(4, 2)]);

        Ok(())
    }

    #[test]
    fn test_parallel_junctions() -> Result<(), Error> {
        let components = vec![
            TestComponent::new(1, ComponentKind::Battery { volts: 12.0 }),
            TestComponent::new(2, ComponentKind::Resistor { ohms: 4.0 }),
            TestComponent::new(3, ComponentKind::Resistor { ohms: 4.0 }),
        ];
        let connections = vec![
            TestConnection::parallel_junction(1, 2),
            TestConnection::new(1, 3),
        ];

        let graph = CircuitGraph::try_new(components, connections, CircuitGraphConfig::default())?;

        assert!(graph.is_forced_junction(1));
        assert!(graph.is_forced_junction(2));
        assert!(!graph.is_forced_junction(3));

        Ok(())
    }
}
