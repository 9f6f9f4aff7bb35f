// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains features
//! that are shared by all tests of the `graph` module.
//!
//! - the `TestComponent` and `TestConnection` types, which implement the `Node`
//!   and `Edge` traits respectively.
//! - the `CircuitBuilder`, which can declaratively build circuits for use in
//!   tests.

use crate::{CircuitGraph, CircuitGraphConfig, ComponentKind, Edge, Error, Node};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestComponent(u64, ComponentKind);

impl TestComponent {
    pub(crate) fn new(id: u64, kind: ComponentKind) -> Self {
        TestComponent(id, kind)
    }
}

impl Node for TestComponent {
    fn component_id(&self) -> u64 {
        self.0
    }

    fn kind(&self) -> ComponentKind {
        self.1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestConnection(u64, u64, bool);

impl TestConnection {
    pub(crate) fn new(source: u64, destination: u64) -> Self {
        TestConnection(source, destination, false)
    }

    pub(crate) fn parallel_junction(source: u64, destination: u64) -> Self {
        TestConnection(source, destination, true)
    }
}

impl Edge for TestConnection {
    fn source(&self) -> u64 {
        self.0
    }

    fn destination(&self) -> u64 {
        self.1
    }

    fn is_parallel_junction(&self) -> bool {
        self.2
    }
}

/// Represents a component added to the `CircuitBuilder`.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug)]
pub(crate) struct ComponentHandle(u64);

impl ComponentHandle {
    /// Returns the component ID of the component.
    pub(crate) fn component_id(&self) -> u64 {
        self.0
    }
}

/// A builder for creating circuits easily, for use in tests.
///
/// Component IDs are assigned in the order components are added, starting
/// from 1.
pub(crate) struct CircuitBuilder {
    components: Vec<TestComponent>,
    connections: Vec<TestConnection>,
    next_id: u64,
}

impl CircuitBuilder {
    /// Creates a new `CircuitBuilder`.
    pub(crate) fn new() -> Self {
        CircuitBuilder {
            components: Vec::new(),
            connections: Vec::new(),
            next_id: 1,
        }
    }

    /// Adds a component to the circuit and returns its handle.
    pub(crate) fn add_component(&mut self, kind: ComponentKind) -> ComponentHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.components.push(TestComponent::new(id, kind));
        ComponentHandle(id)
    }

    pub(crate) fn battery(&mut self, volts: f64) -> ComponentHandle {
        self.add_component(ComponentKind::Battery { volts })
    }

    pub(crate) fn resistor(&mut self, ohms: f64) -> ComponentHandle {
        self.add_component(ComponentKind::Resistor { ohms })
    }

    pub(crate) fn switch(&mut self, closed: bool) -> ComponentHandle {
        self.add_component(ComponentKind::Switch { closed })
    }

    pub(crate) fn ammeter(&mut self) -> ComponentHandle {
        self.add_component(ComponentKind::Ammeter)
    }

    pub(crate) fn voltmeter(&mut self) -> ComponentHandle {
        self.add_component(ComponentKind::Voltmeter)
    }

    pub(crate) fn lightbulb(&mut self) -> ComponentHandle {
        self.add_component(ComponentKind::Lightbulb)
    }

    /// Connects two components in the circuit.
    pub(crate) fn connect(&mut self, a: ComponentHandle, b: ComponentHandle) -> &mut Self {
        self.connections.push(TestConnection::new(a.0, b.0));
        self
    }

    /// Connects the battery directly to a parallel component.
    pub(crate) fn connect_junction(
        &mut self,
        a: ComponentHandle,
        b: ComponentHandle,
    ) -> &mut Self {
        self.connections
            .push(TestConnection::parallel_junction(a.0, b.0));
        self
    }

    /// Connects the given components one after the other, and the last one
    /// back to the first.
    pub(crate) fn ring(&mut self, handles: &[ComponentHandle]) -> &mut Self {
        for pair in handles.windows(2) {
            self.connect(pair[0], pair[1]);
        }
        if let (Some(first), Some(last)) = (handles.first(), handles.last()) {
            self.connect(*last, *first);
        }
        self
    }

    /// Wires a voltmeter across the given component.
    pub(crate) fn measure(
        &mut self,
        voltmeter: ComponentHandle,
        component: ComponentHandle,
    ) -> &mut Self {
        self.connect(voltmeter, component)
    }

    /// Builds and returns the circuit graph from the components and wires
    /// added to the builder.
    pub(crate) fn build(
        &self,
        config: Option<CircuitGraphConfig>,
    ) -> Result<CircuitGraph<TestComponent, TestConnection>, Error> {
        CircuitGraph::try_new(
            self.components.clone(),
            self.connections.clone(),
            config.unwrap_or_default(),
        )
    }
}
