// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Extraction of the independent parallel branches of a circuit from its
//! cycles.

use std::collections::BTreeSet;

use super::Cycle;

/// The components on one independent parallel path of a circuit.
#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
    members: BTreeSet<u64>,
}

impl Branch {
    /// Returns the IDs of the components in the branch, in ascending order.
    pub fn members(&self) -> &BTreeSet<u64> {
        &self.members
    }

    /// Returns true if the component with the given ID is in the branch.
    pub fn contains(&self, component_id: u64) -> bool {
        self.members.contains(&component_id)
    }
}

/// Derives the parallel branches from the given cycles.
///
/// The largest cycle is the outer loop through the supply and is dropped.
/// The components common to all remaining cycles are the shared wiring
/// around the parallel section, and are removed from every branch.  A
/// component is assigned to the first branch it is found in.
pub(super) fn parallel_branches(cycles: &[Cycle]) -> Vec<Branch> {
    if cycles.len() < 2 {
        return vec![];
    }

    let mut largest = 0;
    for (index, cycle) in cycles.iter().enumerate() {
        if cycle.len() > cycles[largest].len() {
            largest = index;
        }
    }

    let remaining = cycles
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != largest)
        .map(|(_, cycle)| cycle)
        .collect::<Vec<_>>();

    let Some((first, rest)) = remaining.split_first() else {
        return vec![];
    };
    let common = rest.iter().fold(first.members().clone(), |common, cycle| {
        common.intersection(cycle.members()).copied().collect()
    });

    let mut claimed = BTreeSet::new();
    let mut branches = vec![];
    for cycle in remaining {
        let mut members = BTreeSet::new();
        for id in cycle.members() {
            if !common.contains(id) && claimed.insert(*id) {
                members.insert(*id);
            }
        }
        if !members.is_empty() {
            branches.push(Branch { members });
        }
    }

    tracing::debug!(
        "Found {} parallel branches: {:?}",
        branches.len(),
        branches.iter().map(|b| &b.members).collect::<Vec<_>>()
    );

    branches
}
