// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Computation of the voltage, current and resistance readings of a circuit.

use std::collections::{BTreeMap, BTreeSet};

use crate::component::round_to;
use crate::component_kind::KindPredicates;
use crate::{CircuitGraph, Edge, Error, Node};

use super::{Branch, Cycle, Topology};

/// The readings of a simulated circuit.
///
/// Resistances, currents and meter readings are rounded to 2 decimal places.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Readings {
    /// Sum of the potential differences of all batteries, in volts.
    pub total_voltage: f64,
    /// Total resistance of the circuit, in ohms.
    pub total_resistance: f64,
    /// Current drawn from the supply, in amperes.
    pub total_current: f64,
    /// Current through each parallel branch, in the order of the branches.
    pub branch_currents: Vec<f64>,
    /// Reading of every ammeter, by ammeter ID.
    pub ammeters: BTreeMap<u64, f64>,
    /// Reading of every voltmeter, by voltmeter ID.
    pub voltmeters: BTreeMap<u64, f64>,
    /// Number of components placed in the circuit, meters included.
    pub component_count: usize,
}

/// The result of a simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct Simulation {
    pub topology: Topology,
    pub cycles: Vec<Cycle>,
    pub branches: Vec<Branch>,
    pub readings: Readings,
}

pub(super) struct Simulator<'a, N, E>
where
    N: Node,
    E: Edge,
{
    cg: &'a CircuitGraph<N, E>,
    wired: BTreeSet<u64>,
}

impl<'a, N, E> Simulator<'a, N, E>
where
    N: Node,
    E: Edge,
{
    pub(super) fn new(cg: &'a CircuitGraph<N, E>) -> Self {
        Self {
            cg,
            wired: cg.nodes(),
        }
    }

    pub(super) fn run(&self) -> Result<Simulation, Error> {
        let total_voltage = self.total_voltage()?;
        let cycles = self.cg.cycles()?;
        let topology = self.cg.topology(&cycles);
        let branches = self.cg.parallel_branches(&cycles);

        if topology != Topology::Disconnected {
            self.check_series_ammeters(&cycles)?;
        }

        let readings = if !self.cg.is_switched_on() {
            tracing::warn!("Circuit is switched off, all readings are 0.");
            self.zero_readings()
        } else {
            match topology {
                Topology::Disconnected => self.zero_readings(),
                Topology::Series => self.series_readings(total_voltage)?,
                Topology::Parallel | Topology::SeriesParallel => {
                    self.parallel_readings(total_voltage, &cycles, &branches)?
                }
            }
        };

        Ok(Simulation {
            topology,
            cycles,
            branches,
            readings,
        })
    }

    fn total_voltage(&self) -> Result<f64, Error> {
        let mut batteries = self.cg.components().filter_map(|n| n.kind().voltage());
        let Some(first) = batteries.next() else {
            return Err(Error::missing_power_source(
                "No battery found. Add a battery to the circuit.",
            ));
        };
        Ok(batteries.fold(first, |total, volts| total + volts))
    }

    /// Rejects circuits with more than one ammeter in series, because they
    /// would all show the same reading.
    fn check_series_ammeters(&self, cycles: &[Cycle]) -> Result<(), Error> {
        if self.cg.config.allow_redundant_series_ammeters {
            return Ok(());
        }
        let ammeters = self
            .cg
            .series_components(cycles)
            .into_iter()
            .filter(|id| self.cg.component(*id).is_ok_and(|n| n.is_ammeter()))
            .collect::<Vec<_>>();
        if ammeters.len() > 1 {
            return Err(Error::invalid_graph(format!(
                "Only 1 ammeter is needed in series, as all ammeters in series show the same reading. Found {:?}.",
                ammeters
            )));
        }
        Ok(())
    }

    fn zero_readings(&self) -> Readings {
        Readings {
            ammeters: self.ammeter_ids().map(|id| (id, 0.0)).collect(),
            voltmeters: self.voltmeter_ids().map(|id| (id, 0.0)).collect(),
            component_count: self.cg.components().count(),
            ..Default::default()
        }
    }

    /// Computes the readings of a single loop.
    ///
    /// The same current flows through every component, and the voltage is
    /// assumed to be split evenly between all components other than the
    /// battery and the ammeters.
    fn series_readings(&self, total_voltage: f64) -> Result<Readings, Error> {
        let mut resistance = 0.0;
        for id in &self.wired {
            resistance += self.resistance(*id)?;
        }
        let total_current = round_to(
            divide(total_voltage, resistance, || {
                "The circuit has no resistance. Cannot divide potential difference by 0.".to_string()
            })?,
            2,
        );

        let mut sharing = 0;
        for id in &self.wired {
            let node = self.cg.component(*id)?;
            if !node.is_battery() && !node.is_ammeter() {
                sharing += 1;
            }
        }

        let mut voltmeters = BTreeMap::new();
        for id in self.voltmeter_ids() {
            let reading = match self.measured(id) {
                Some(_) => round_to(
                    divide(total_voltage, sharing as f64, || {
                        format!("Voltmeter {id} measures a circuit with no components to share the voltage.")
                    })?,
                    2,
                ),
                None => 0.0,
            };
            voltmeters.insert(id, reading);
        }

        Ok(Readings {
            total_voltage,
            total_resistance: round_to(resistance, 2),
            total_current,
            branch_currents: vec![],
            ammeters: self
                .ammeter_ids()
                .map(|id| (id, self.current_if_wired(id, total_current)))
                .collect(),
            voltmeters,
            component_count: self.cg.components().count(),
        })
    }

    /// Computes the readings of a circuit with parallel branches.
    ///
    /// Every branch is driven by the full supply voltage.  The currents of
    /// the branches add up to the total current, and the resistances of the
    /// branches combine as `1 / R = 1 / R1 + 1 / R2 + ...`, to which the
    /// resistances in series are added.
    fn parallel_readings(
        &self,
        total_voltage: f64,
        cycles: &[Cycle],
        branches: &[Branch],
    ) -> Result<Readings, Error> {
        let in_series = self.cg.series_components(cycles);

        let mut branch_resistances = Vec::with_capacity(branches.len());
        let mut branch_currents = Vec::with_capacity(branches.len());
        let mut conductance = 0.0;
        for branch in branches {
            let mut resistance = 0.0;
            for id in branch.members() {
                resistance += self.resistance(*id)?;
            }
            let current = divide(total_voltage, resistance, || {
                format!(
                    concat!(
                        "Parallel branch {:?} has no resistance. Cannot divide potential ",
                        "difference by 0. Add a resistor in series with the branch."
                    ),
                    branch.members()
                )
            })?;
            conductance += 1.0 / resistance;
            branch_resistances.push(resistance);
            branch_currents.push(round_to(current, 2));
        }

        let mut series_resistance = 0.0;
        for id in &in_series {
            series_resistance += self.resistance(*id)?;
        }
        let parallel_resistance = divide(1.0, conductance, || {
            "The circuit has no parallel branch with resistance.".to_string()
        })?;
        let total_resistance = round_to(parallel_resistance + series_resistance, 2);
        let total_current = round_to(branch_currents.iter().sum::<f64>(), 2);

        let mut ammeters = BTreeMap::new();
        for id in self.ammeter_ids() {
            let reading = match branches.iter().position(|b| b.contains(id)) {
                Some(index) if !in_series.contains(&id) => branch_currents[index],
                _ => self.current_if_wired(id, total_current),
            };
            ammeters.insert(id, reading);
        }

        let split_voltage = if in_series.is_empty() {
            total_voltage
        } else {
            round_to(total_voltage / in_series.len() as f64, 2)
        };

        let mut voltmeters = BTreeMap::new();
        for id in self.voltmeter_ids() {
            let Some(measured) = self.measured(id) else {
                voltmeters.insert(id, 0.0);
                continue;
            };
            let ohms = self.resistance(measured)?;
            let reading = match branches.iter().position(|b| b.contains(measured)) {
                Some(index) if ohms > 0.0 => split_voltage / branch_resistances[index] * ohms,
                _ => split_voltage,
            };
            voltmeters.insert(id, round_to(reading, 2));
        }

        Ok(Readings {
            total_voltage,
            total_resistance,
            total_current,
            branch_currents,
            ammeters,
            voltmeters,
            component_count: self.cg.components().count(),
        })
    }

    /// Returns the resistance of the component with the given ID, or 0 if
    /// it is not resistive.
    fn resistance(&self, component_id: u64) -> Result<f64, Error> {
        Ok(self
            .cg
            .component(component_id)?
            .kind()
            .resistance()
            .unwrap_or(0.0))
    }

    /// Returns `current` for a wired component, and 0 for one that has no
    /// wires and so carries no current.
    fn current_if_wired(&self, component_id: u64, current: f64) -> f64 {
        if self.wired.contains(&component_id) {
            current
        } else {
            0.0
        }
    }

    /// Returns the wired component measured by the given voltmeter.
    fn measured(&self, voltmeter_id: u64) -> Option<u64> {
        self.cg
            .voltmeter_pairs
            .get(&voltmeter_id)
            .copied()
            .filter(|id| self.wired.contains(id))
    }

    fn ammeter_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.cg
            .components()
            .filter(|n| n.is_ammeter())
            .map(|n| n.component_id())
    }

    fn voltmeter_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.cg
            .components()
            .filter(|n| n.is_voltmeter())
            .map(|n| n.component_id())
    }
}

/// Divides `numerator` by `denominator`, or returns a `DivisionByZero` error
/// with the given description if `denominator` is 0.
fn divide(
    numerator: f64,
    denominator: f64,
    describe: impl FnOnce() -> String,
) -> Result<f64, Error> {
    if denominator == 0.0 {
        return Err(Error::division_by_zero(describe()));
    }
    Ok(numerator / denominator)
}
