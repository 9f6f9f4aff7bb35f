// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for validating the components placed in a [`CircuitGraph`].

use crate::component_kind::KindPredicates;
use crate::{ComponentKind, Edge, Error, Node};

use super::CircuitGraphValidator;

impl<N, E> CircuitGraphValidator<'_, N, E>
where
    N: Node,
    E: Edge,
{
    /// Validates that no more than `max_components` components are placed.
    pub(super) fn validate_component_count(&self) -> Result<(), Error> {
        let count = self.cg.components().count();
        let max = self.cg.config.max_components;
        if count > max {
            return Err(Error::invalid_graph(format!(
                "A circuit can have at most {max} components. Found {count}."
            )));
        }
        Ok(())
    }

    /// Validates that:
    ///  - batteries, resistors and variable resistors have a magnitude in
    ///    `(0, max_magnitude]`,
    ///  - thermistors have a positive resistance.
    pub(super) fn validate_magnitudes(&self) -> Result<(), Error> {
        let max = self.cg.config.max_magnitude;
        for node in self.cg.components() {
            match node.kind() {
                ComponentKind::Battery { volts } => {
                    self.ensure_in_range(node, volts, max, "V")?;
                }
                ComponentKind::Resistor { ohms } | ComponentKind::VariableResistor { ohms } => {
                    self.ensure_in_range(node, ohms, max, "Ω")?;
                }
                ComponentKind::Thermistor { ohms } => {
                    self.ensure_in_range(node, ohms, f64::MAX, "Ω")?;
                }
                ComponentKind::Switch { .. }
                | ComponentKind::Voltmeter
                | ComponentKind::Ammeter
                | ComponentKind::Lightbulb => {}
            }
        }
        Ok(())
    }

    /// Validates that there is at most one battery, one switch, one variable
    /// resistor and one thermistor.
    pub(super) fn validate_unique_kinds(&self) -> Result<(), Error> {
        self.ensure_at_most_one(|n| n.is_battery(), "Battery")?;
        self.ensure_at_most_one(|n| n.is_switch(), "Switch")?;
        self.ensure_at_most_one(|n| n.is_variable_resistor(), "VariableResistor")?;
        self.ensure_at_most_one(|n| n.is_thermistor(), "Thermistor")?;
        Ok(())
    }
}
