// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A graph representation of the components of a DC circuit, and the wires
//! between them.

mod analysis;
mod creation;
mod retrieval;
mod validation;

pub mod iterators;

#[cfg(test)]
mod test_utils;

pub use analysis::{Branch, Cycle, Readings, Simulation, Topology};

use crate::{CircuitGraphConfig, Edge, Node};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// `Node`s stored in an `UnGraph` instance can be addressed with `NodeIndex`es.
///
/// `NodeIndexMap` stores the corresponding `NodeIndex` for any `component_id`, so
/// that Nodes in the `UnGraph` can be retrieved from their `component_id`s.
pub(crate) type NodeIndexMap = HashMap<u64, NodeIndex>;

/// `Edge`s are not stored in the `UnGraph` instance, so we need to store them
/// separately.
///
/// `EdgeMap` can be used to lookup the `Edge` for any pair of `NodeIndex`
/// values.  Keys are normalized so that the smaller index comes first.
pub(crate) type EdgeMap<E> = HashMap<(NodeIndex, NodeIndex), E>;

/// A graph representation of the components of a DC circuit and the wires
/// between them.
///
/// Voltmeters are components of the graph, but wires to them are not graph
/// edges.  They are tracked as `(voltmeter, measured component)` pairs
/// instead, and never take part in the analysis of the circuit's topology.
pub struct CircuitGraph<N, E>
where
    N: Node,
    E: Edge,
{
    graph: UnGraph<N, ()>,
    node_indices: NodeIndexMap,
    edges: EdgeMap<E>,
    junctions: BTreeSet<u64>,
    voltmeter_pairs: BTreeMap<u64, u64>,
    config: CircuitGraphConfig,
}
