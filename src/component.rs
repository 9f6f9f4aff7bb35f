// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Ready-made [`Node`] and [`Edge`] implementations, for callers that don't
//! have component and wire types of their own.

use crate::{ComponentKind, Edge, Error, Node};

/// Resistance of the thermistor at the nominal temperature, in ohms.
const THERMISTOR_NOMINAL_OHMS: f64 = 50.0;
/// Nominal temperature of the thermistor, in degrees Celsius.
const THERMISTOR_NOMINAL_CELSIUS: f64 = 75.0;
/// B coefficient of the thermistor.
const THERMISTOR_B: f64 = 3950.0;
/// Range of temperatures a thermistor can be set to, in degrees Celsius.
const THERMISTOR_CELSIUS_RANGE: std::ops::RangeInclusive<f64> = -100.0..=100.0;

const ZERO_CELSIUS_IN_KELVIN: f64 = 273.15;

/// A component placed in a circuit.
#[derive(Clone, Debug, PartialEq)]
pub struct Component {
    id: u64,
    kind: ComponentKind,
}

impl Component {
    /// Creates a component of the given kind.
    ///
    /// Magnitudes are taken as they are.  Use the kind specific constructors
    /// to get them rounded to 3 significant figures.
    pub fn new(id: u64, kind: ComponentKind) -> Self {
        Self { id, kind }
    }

    pub fn battery(id: u64, volts: f64) -> Self {
        Self::new(
            id,
            ComponentKind::Battery {
                volts: round_to_3sf(volts),
            },
        )
    }

    pub fn resistor(id: u64, ohms: f64) -> Self {
        Self::new(
            id,
            ComponentKind::Resistor {
                ohms: round_to_3sf(ohms),
            },
        )
    }

    pub fn variable_resistor(id: u64, ohms: f64) -> Self {
        Self::new(
            id,
            ComponentKind::VariableResistor {
                ohms: round_to_3sf(ohms),
            },
        )
    }

    /// Creates a thermistor whose resistance corresponds to the given
    /// temperature.
    ///
    /// The resistance follows the B-parameter equation
    /// `R = R0 * exp(B * (1/T0 - 1/T))`, with temperatures in Kelvin.
    ///
    /// Returns an error if the temperature is outside -100 °C to 100 °C.
    pub fn thermistor(id: u64, celsius: f64) -> Result<Self, Error> {
        if !THERMISTOR_CELSIUS_RANGE.contains(&celsius) {
            return Err(Error::invalid_component(format!(
                "Thermistor:{id} can't be set to {celsius}°C. Expected a temperature between {}°C and {}°C.",
                THERMISTOR_CELSIUS_RANGE.start(),
                THERMISTOR_CELSIUS_RANGE.end()
            )));
        }
        let nominal_kelvin = THERMISTOR_NOMINAL_CELSIUS + ZERO_CELSIUS_IN_KELVIN;
        let kelvin = celsius + ZERO_CELSIUS_IN_KELVIN;
        let ohms =
            THERMISTOR_NOMINAL_OHMS * (THERMISTOR_B * (1.0 / nominal_kelvin - 1.0 / kelvin)).exp();

        Ok(Self::new(
            id,
            ComponentKind::Thermistor {
                ohms: round_to_3sf(round_to(ohms, 2)),
            },
        ))
    }

    pub fn switch(id: u64, closed: bool) -> Self {
        Self::new(id, ComponentKind::Switch { closed })
    }

    pub fn voltmeter(id: u64) -> Self {
        Self::new(id, ComponentKind::Voltmeter)
    }

    pub fn ammeter(id: u64) -> Self {
        Self::new(id, ComponentKind::Ammeter)
    }

    pub fn lightbulb(id: u64) -> Self {
        Self::new(id, ComponentKind::Lightbulb)
    }
}

impl Node for Component {
    fn component_id(&self) -> u64 {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        self.kind
    }
}

/// A wire between two components.
#[derive(Clone, Debug, PartialEq)]
pub struct Wire {
    source: u64,
    destination: u64,
    parallel_junction: bool,
}

impl Wire {
    pub fn new(source: u64, destination: u64) -> Self {
        Self {
            source,
            destination,
            parallel_junction: false,
        }
    }

    /// Creates a wire that connects the battery directly to a parallel
    /// component.
    pub fn parallel_junction(source: u64, destination: u64) -> Self {
        Self {
            source,
            destination,
            parallel_junction: true,
        }
    }
}

impl Edge for Wire {
    fn source(&self) -> u64 {
        self.source
    }

    fn destination(&self) -> u64 {
        self.destination
    }

    fn is_parallel_junction(&self) -> bool {
        self.parallel_junction
    }
}

/// Rounds `value` to the given number of decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Rounds `value` to 3 significant figures.
pub(crate) fn round_to_3sf(value: f64) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    round_to(value, 2 - magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rounding() {
        assert_eq!(round_to(1.005_1, 2), 1.01);
        assert_eq!(round_to(2.0 / 3.0, 2), 0.67);
        assert_relative_eq!(round_to_3sf(123.456), 123.0);
        assert_relative_eq!(round_to_3sf(4.5678), 4.57);
        assert_relative_eq!(round_to_3sf(0.012_345), 0.0123);
        assert_eq!(round_to_3sf(0.0), 0.0);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(
            Component::resistor(3, 12.345).kind(),
            ComponentKind::Resistor { ohms: 12.3 }
        );
        assert_eq!(
            Component::battery(1, 9.0).kind(),
            ComponentKind::Battery { volts: 9.0 }
        );
        assert_eq!(Component::ammeter(4).component_id(), 4);
        assert!(Wire::parallel_junction(1, 2).is_parallel_junction());
        assert!(!Wire::new(1, 2).is_parallel_junction());
    }

    #[test]
    fn test_thermistor() -> Result<(), Error> {
        // At the nominal temperature, the thermistor has its nominal resistance.
        let thermistor = Component::thermistor(7, 75.0)?;
        assert_eq!(thermistor.kind(), ComponentKind::Thermistor { ohms: 50.0 });

        // Resistance rises with temperature.
        let cold = Component::thermistor(7, 25.0)?.kind().resistance();
        let hot = Component::thermistor(7, 100.0)?.kind().resistance();
        assert_eq!(cold, Some(7.46));
        assert_eq!(hot, Some(107.0));

        assert!(Component::thermistor(7, 150.0).is_err_and(|e| e
            == Error::invalid_component(
                "Thermistor:7 can't be set to 150°C. Expected a temperature between -100°C and 100°C."
            )));

        Ok(())
    }
}
