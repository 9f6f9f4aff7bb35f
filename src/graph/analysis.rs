// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for analysing the topology of a circuit, and for computing its
//! electrical quantities.

mod branches;
mod cycles;
mod quantities;
mod topology;

use std::collections::BTreeSet;

pub use branches::Branch;
pub use cycles::Cycle;
pub use quantities::{Readings, Simulation};
pub use topology::Topology;

use crate::component_kind::KindPredicates;
use crate::{CircuitGraph, Edge, Error, Node};

impl<N, E> CircuitGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Returns all cycles in the circuit, including the trivial ones that end
    /// at a component with a single wire.
    ///
    /// Components and their neighbors are visited in ascending order of
    /// their IDs, so the result is deterministic.
    pub fn cycles(&self) -> Result<Vec<Cycle>, Error> {
        cycles::CycleFinder::new(self).find()
    }

    /// Classifies the circuit from its cycles.
    pub fn topology(&self, cycles: &[Cycle]) -> Topology {
        topology::TopologyClassifier::new(self, cycles).classify()
    }

    /// Returns the IDs of the components that are in every cycle.
    ///
    /// Batteries and voltmeters are never considered.
    pub fn series_components(&self, cycles: &[Cycle]) -> BTreeSet<u64> {
        topology::TopologyClassifier::new(self, cycles).series_components()
    }

    /// Returns the independent parallel branches of the circuit.
    ///
    /// This is empty unless there is more than one cycle.
    pub fn parallel_branches(&self, cycles: &[Cycle]) -> Vec<Branch> {
        branches::parallel_branches(cycles)
    }

    /// Returns true if the circuit is switched on, i.e., every switch in it
    /// is closed.  A circuit without a switch is always on.
    pub fn is_switched_on(&self) -> bool {
        !self.components().any(|n| n.is_open_switch())
    }

    /// Runs a simulation of the circuit.
    ///
    /// Returns an error if there is no battery in the circuit, if more than
    /// one ammeter is in series, or if a current can't be computed because
    /// a branch or the whole circuit has no resistance.
    pub fn simulate(&self) -> Result<Simulation, Error> {
        quantities::Simulator::new(self).run()
    }
}
