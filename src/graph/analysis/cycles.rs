// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Depth-first enumeration of the cycles in a [`CircuitGraph`].

use std::collections::BTreeSet;

use crate::{CircuitGraph, Edge, Error, Node};

/// A set of components that lie on a closed walk in the circuit.
///
/// A single wire that ends at a component with no other wires is also
/// recorded as a cycle, so that a parallel leg wired directly to the battery
/// counts as a branch.  Such cycles are not [closed][Cycle::is_closed].
#[derive(Clone, Debug, PartialEq)]
pub struct Cycle {
    members: BTreeSet<u64>,
    closed: bool,
}

impl Cycle {
    /// Returns the IDs of the components in the cycle, in ascending order.
    pub fn members(&self) -> &BTreeSet<u64> {
        &self.members
    }

    /// Returns true if the component with the given ID is in the cycle.
    pub fn contains(&self, component_id: u64) -> bool {
        self.members.contains(&component_id)
    }

    /// Returns the number of components in the cycle.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the cycle has no components.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns true if the cycle was found by walking back to where the walk
    /// started, and false if it is a walk that ended at a component with a
    /// single wire.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

pub(super) struct CycleFinder<'a, N, E>
where
    N: Node,
    E: Edge,
{
    cg: &'a CircuitGraph<N, E>,
    max_depth: usize,
}

impl<'a, N, E> CycleFinder<'a, N, E>
where
    N: Node,
    E: Edge,
{
    pub(super) fn new(cg: &'a CircuitGraph<N, E>) -> Self {
        Self {
            cg,
            max_depth: cg.graph.node_count(),
        }
    }

    /// Starts a search from every wired component and collects the cycles
    /// found, without duplicates.
    pub(super) fn find(&self) -> Result<Vec<Cycle>, Error> {
        let mut cycles = vec![];
        for root in self.cg.nodes() {
            self.visit(root, vec![], &mut cycles)?;
        }

        tracing::debug!(
            "Found {} cycles: {:?}",
            cycles.len(),
            cycles.iter().map(|c| &c.members).collect::<Vec<_>>()
        );

        Ok(cycles)
    }

    /// Visits `node`, having walked `path` from the root to get to it.
    ///
    /// A component is only considered visited while it is on the current
    /// path, so it can be walked through again from a different root or
    /// through a sibling.
    fn visit(&self, node: u64, mut path: Vec<u64>, cycles: &mut Vec<Cycle>) -> Result<(), Error> {
        if path.len() >= self.max_depth {
            return Err(Error::internal(format!(
                "Cycle search walked more than {} components: {:?} -> {node}",
                self.max_depth, path
            )));
        }
        path.push(node);

        let neighbors = self.cg.neighbor_ids(node)?;
        for &neighbor in &neighbors {
            if !path.contains(&neighbor) {
                self.visit(neighbor, path.clone(), cycles)?;
            } else if neighbor == path[0] && path.len() > 2 {
                Self::record(cycles, &path, true);
            }
        }

        if neighbors.len() == 1 && path.len() > 1 {
            Self::record(cycles, &path, false);
        }

        Ok(())
    }

    fn record(cycles: &mut Vec<Cycle>, path: &[u64], closed: bool) {
        let members = path.iter().copied().collect::<BTreeSet<_>>();
        match cycles.iter_mut().find(|c| c.members == members) {
            Some(existing) => existing.closed |= closed,
            None => cycles.push(Cycle { members, closed }),
        }
    }
}

#[cfg(test)]
pub(crate) fn cycle(members: &[u64], closed: bool) -> Cycle {
    Cycle {
        members: members.iter().copied().collect(),
        closed,
    }
}
