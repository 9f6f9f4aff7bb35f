// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for retrieving components and wires from a [`CircuitGraph`].

use std::collections::BTreeSet;

use crate::iterators::{Components, Connections, Neighbors};
use crate::{CircuitGraph, Edge, Error, Node};

/// `Component` and `Connection` retrieval.
impl<N, E> CircuitGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Returns the component with the given `component_id`, if it exists.
    pub fn component(&self, component_id: u64) -> Result<&N, Error> {
        self.node_indices
            .get(&component_id)
            .map(|i| &self.graph[*i])
            .ok_or_else(|| {
                Error::component_not_found(format!("Component with id {} not found.", component_id))
            })
    }

    /// Returns an iterator over the components in the graph, wired or not.
    pub fn components(&self) -> Components<'_, N> {
        Components {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns an iterator over the wires in the graph.
    pub fn connections(&self) -> Connections<'_, N, E> {
        Connections {
            cg: self,
            iter: self.graph.raw_edges().iter(),
        }
    }

    /// Returns an iterator over the components wired to the component with
    /// the given `component_id`.
    ///
    /// Returns an error if the given `component_id` does not exist.
    pub fn neighbors(&self, component_id: u64) -> Result<Neighbors<'_, N>, Error> {
        self.node_indices
            .get(&component_id)
            .map(|&index| Neighbors {
                graph: &self.graph,
                iter: self.graph.neighbors(index),
            })
            .ok_or_else(|| {
                Error::component_not_found(format!("Component with id {} not found.", component_id))
            })
    }

    /// Returns the IDs of the components wired to the component with the
    /// given `component_id`, in ascending order.
    pub fn neighbor_ids(&self, component_id: u64) -> Result<BTreeSet<u64>, Error> {
        Ok(self
            .neighbors(component_id)?
            .map(|n| n.component_id())
            .collect())
    }

    /// Returns the number of components wired to the component with the
    /// given `component_id`.
    pub fn degree(&self, component_id: u64) -> Result<usize, Error> {
        Ok(self.neighbors(component_id)?.count())
    }

    /// Returns the IDs of all components that have at least one wire, in
    /// ascending order.
    pub fn nodes(&self) -> BTreeSet<u64> {
        self.graph
            .node_indices()
            .filter(|&i| self.graph.neighbors(i).next().is_some())
            .map(|i| self.graph[i].component_id())
            .collect()
    }

    /// Returns true if the component was wired directly between the battery
    /// and a parallel section.
    pub fn is_forced_junction(&self, component_id: u64) -> bool {
        self.junctions.contains(&component_id)
    }

    /// Returns an iterator over `(voltmeter_id, measured_component_id)`
    /// pairs, in ascending order of voltmeter IDs.
    pub fn voltmeter_pairs(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.voltmeter_pairs.iter().map(|(v, m)| (*v, *m))
    }
}
