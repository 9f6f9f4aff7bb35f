// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Classification of a circuit as series, parallel or series-parallel.

use std::collections::BTreeSet;
use std::fmt::Display;

use crate::component_kind::KindPredicates;
use crate::{CircuitGraph, Edge, Node};

use super::Cycle;

/// The topology of a circuit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// A single loop.
    Series,
    /// Several loops, with no component common to all of them.
    Parallel,
    /// Several loops, with at least one component common to all of them.
    SeriesParallel,
    /// The circuit has no loop, is a single wire between two components, or
    /// has a component that leads nowhere.  Nothing can be computed for such
    /// a circuit.
    Disconnected,
}

impl Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Topology::Series => write!(f, "Series"),
            Topology::Parallel => write!(f, "Parallel"),
            Topology::SeriesParallel => write!(f, "Series-Parallel"),
            Topology::Disconnected => write!(f, "Disconnected component detected"),
        }
    }
}

pub(super) struct TopologyClassifier<'a, N, E>
where
    N: Node,
    E: Edge,
{
    cg: &'a CircuitGraph<N, E>,
    cycles: &'a [Cycle],
}

impl<'a, N, E> TopologyClassifier<'a, N, E>
where
    N: Node,
    E: Edge,
{
    pub(super) fn new(cg: &'a CircuitGraph<N, E>, cycles: &'a [Cycle]) -> Self {
        Self { cg, cycles }
    }

    pub(super) fn classify(&self) -> Topology {
        let wired = self.cg.nodes().len();
        let topology = match self.cycles.len() {
            0 => Topology::Disconnected,
            _ if wired <= 2 => {
                tracing::warn!("No end-to-end connection found, only {wired} components are wired.");
                Topology::Disconnected
            }
            1 => Topology::Series,
            _ => {
                let dead_ends = self.dead_ends();
                if !dead_ends.is_empty() {
                    tracing::warn!("Components {:?} lead nowhere.", dead_ends);
                    Topology::Disconnected
                } else if !self.series_components().is_empty() {
                    Topology::SeriesParallel
                } else {
                    Topology::Parallel
                }
            }
        };

        tracing::debug!("Circuit classified as {topology}.");
        topology
    }

    /// Returns the wired components that are in every cycle.
    pub(super) fn series_components(&self) -> BTreeSet<u64> {
        if self.cycles.is_empty() {
            return BTreeSet::new();
        }
        self.cg
            .components()
            .filter(|n| n.is_series_candidate())
            .map(|n| n.component_id())
            .filter(|id| self.cycles.iter().all(|c| c.contains(*id)))
            .collect()
    }

    /// Returns the components that have a single wire and are not wired
    /// directly between the battery and a parallel section.
    fn dead_ends(&self) -> Vec<u64> {
        self.cg
            .nodes()
            .into_iter()
            .filter(|id| !self.cg.is_forced_junction(*id))
            .filter(|id| self.cg.degree(*id).is_ok_and(|degree| degree == 1))
            .collect()
    }
}
