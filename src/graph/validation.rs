// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for validating a [`CircuitGraph`].

mod invariant_checks;
mod validate_components;

use crate::{CircuitGraph, Edge, Error, Node};

pub(crate) struct CircuitGraphValidator<'a, N, E>
where
    N: Node,
    E: Edge,
{
    cg: &'a CircuitGraph<N, E>,
}

impl<N, E> CircuitGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Validates the components placed in the graph.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        let validator = CircuitGraphValidator { cg: self };

        validator.validate_component_count()?;
        validator.validate_magnitudes()?;
        validator.validate_unique_kinds()?;

        Ok(())
    }
}
