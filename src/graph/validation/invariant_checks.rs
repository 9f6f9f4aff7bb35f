// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Helper methods for checking invariants of a [`CircuitGraph`].

use crate::{Edge, Error, Node};

use super::CircuitGraphValidator;

impl<N, E> CircuitGraphValidator<'_, N, E>
where
    N: Node,
    E: Edge,
{
    /// Checks that the given magnitude lies in `(0, max]`.
    pub(super) fn ensure_in_range(
        &self,
        node: &N,
        magnitude: f64,
        max: f64,
        unit: &str,
    ) -> Result<(), Error> {
        if !(magnitude > 0.0 && magnitude <= max) {
            return Err(Error::invalid_component(format!(
                "{}:{} must have a value greater than 0{unit} and at most {max}{unit}. Found {magnitude}{unit}.",
                node.kind(),
                node.component_id(),
            )));
        }
        Ok(())
    }

    /// Checks that at most one component satisfies the given predicate.
    pub(super) fn ensure_at_most_one(
        &self,
        predicate: impl Fn(&N) -> bool,
        description: &str,
    ) -> Result<(), Error> {
        let matching = self
            .cg
            .components()
            .filter(|n| predicate(n))
            .map(|n| n.component_id())
            .collect::<Vec<_>>();
        if matching.len() > 1 {
            return Err(Error::invalid_graph(format!(
                "Only one {description} can be placed. Found {matching:?}."
            )));
        }
        Ok(())
    }
}
