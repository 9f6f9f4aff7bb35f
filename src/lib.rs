// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# DC Circuit Graph

This is a library for representing the components of a DC circuit and the
wires between them as an undirected graph.

A graph representation makes it easy to find the loops in the circuit, to
classify it as series, parallel or series-parallel, and to compute the
voltage, current and resistance readings of its meters.

## The `Node` and `Edge` traits

The main struct is [`CircuitGraph`], instances of which can be created by
passing an iterator of components and the wires between them to the
[`try_new`][CircuitGraph::try_new] method.

The library doesn't need to know about the component and wire types of the
application and instead uses traits to interact with them.  To be usable with
this library, the component and wire types must implement the [`Node`] and
[`Edge`] traits, respectively.  [`Component`] and [`Wire`] are ready-made
implementations.

## Validation

The [`try_new`][CircuitGraph::try_new] method checks that:

- Component IDs are unique and non-zero.
- There are at most as many components as the [`CircuitGraphConfig`] allows.
- Batteries and resistive components have sensible magnitudes.
- There is at most one battery, switch, variable resistor and thermistor.
- All wires connect two different, existing components.
- A voltmeter measures a single component, and is never wired to another
  voltmeter.

If any of the validation steps fail, the method will return an [`Error`], and a
[`CircuitGraph`] instance otherwise.

## Analysis

- [`cycles`][CircuitGraph::cycles] finds the loops in the circuit.
- [`topology`][CircuitGraph::topology] classifies the circuit as a [`Topology`].
- [`parallel_branches`][CircuitGraph::parallel_branches] extracts the
  independent [`Branch`]es of a parallel circuit.
- [`simulate`][CircuitGraph::simulate] runs all of the above and computes the
  [`Readings`] of the circuit.
*/

mod component;
pub use component::{Component, Wire};

mod component_kind;
pub use component_kind::ComponentKind;

mod config;
pub use config::CircuitGraphConfig;

mod graph;
pub use graph::{iterators, Branch, CircuitGraph, Cycle, Readings, Simulation, Topology};

mod graph_traits;
pub use graph_traits::{Edge, Node};

mod error;
pub use error::Error;
