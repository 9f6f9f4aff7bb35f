// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for the `CircuitGraph`.

/// Configuration options for the `CircuitGraph`.
#[derive(Clone, Debug)]
pub struct CircuitGraphConfig {
    /// The maximum number of components that can be placed in a circuit,
    /// meters included.
    pub max_components: usize,

    /// The largest magnitude accepted for batteries (volts), resistors and
    /// variable resistors (ohms).
    pub max_magnitude: f64,

    /// Whether to allow more than one ammeter in series.  All ammeters in
    /// series show the same reading, so by default a circuit with more than
    /// one is rejected during simulation.
    pub allow_redundant_series_ammeters: bool,
}

impl Default for CircuitGraphConfig {
    fn default() -> Self {
        Self {
            max_components: 5,
            max_magnitude: 500.0,
            allow_redundant_series_ammeters: false,
        }
    }
}
