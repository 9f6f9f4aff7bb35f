// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `ComponentKind` enum, which represents the kind of
//! a component along with its magnitude, where one applies.

use crate::graph_traits::Node;
use std::fmt::Display;

/// Represents the kind of a component.
///
/// Values of the caller's component types need to be converted to this type,
/// so that they can be used in the `CircuitGraph`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ComponentKind {
    Battery { volts: f64 },
    Resistor { ohms: f64 },
    VariableResistor { ohms: f64 },
    Thermistor { ohms: f64 },
    Switch { closed: bool },
    Voltmeter,
    Ammeter,
    Lightbulb,
}

impl ComponentKind {
    /// Returns the resistance of the component in ohms, if it is one of the
    /// resistive kinds.
    pub fn resistance(&self) -> Option<f64> {
        match self {
            ComponentKind::Resistor { ohms }
            | ComponentKind::VariableResistor { ohms }
            | ComponentKind::Thermistor { ohms } => Some(*ohms),
            _ => None,
        }
    }

    /// Returns the potential difference of the component in volts, if it is
    /// a battery.
    pub fn voltage(&self) -> Option<f64> {
        match self {
            ComponentKind::Battery { volts } => Some(*volts),
            _ => None,
        }
    }
}

impl Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentKind::Battery { .. } => write!(f, "Battery"),
            ComponentKind::Resistor { .. } => write!(f, "Resistor"),
            ComponentKind::VariableResistor { .. } => write!(f, "VariableResistor"),
            ComponentKind::Thermistor { .. } => write!(f, "Thermistor"),
            ComponentKind::Switch { .. } => write!(f, "Switch"),
            ComponentKind::Voltmeter => write!(f, "Voltmeter"),
            ComponentKind::Ammeter => write!(f, "Ammeter"),
            ComponentKind::Lightbulb => write!(f, "Lightbulb"),
        }
    }
}

/// Predicates for checking the component kind of a `Node`.
pub(crate) trait KindPredicates: Node {
    fn is_battery(&self) -> bool {
        matches!(self.kind(), ComponentKind::Battery { .. })
    }

    fn is_variable_resistor(&self) -> bool {
        matches!(self.kind(), ComponentKind::VariableResistor { .. })
    }

    fn is_thermistor(&self) -> bool {
        matches!(self.kind(), ComponentKind::Thermistor { .. })
    }

    fn is_switch(&self) -> bool {
        matches!(self.kind(), ComponentKind::Switch { .. })
    }

    fn is_open_switch(&self) -> bool {
        self.kind() == ComponentKind::Switch { closed: false }
    }

    fn is_voltmeter(&self) -> bool {
        self.kind() == ComponentKind::Voltmeter
    }

    fn is_ammeter(&self) -> bool {
        self.kind() == ComponentKind::Ammeter
    }

    /// Returns true for the kinds that can be in series with the rest of the
    /// circuit.  Batteries drive every loop and voltmeters are never wired
    /// into the graph, so neither is considered.
    fn is_series_candidate(&self) -> bool {
        !self.is_battery() && !self.is_voltmeter()
    }
}

/// Implement the `KindPredicates` trait for all types that implement the
/// `Node` trait.
impl<T: Node> KindPredicates for T {}
