// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the traits that need to be implemented by the types
//! that represent a component and a wire.

use crate::component_kind::ComponentKind;

/**
This trait needs to be implemented by the type that represents a component.

Read more about why this is necessary [here][crate#the-node-and-edge-traits].

<details>
<summary>Example implementation for a canvas widget record:</summary>

```ignore
impl dc_circuit_graph::Node for canvas::PlacedWidget {
    fn component_id(&self) -> u64 {
        self.id
    }

    fn kind(&self) -> dc_circuit_graph::ComponentKind {
        use dc_circuit_graph::ComponentKind as gr;

        match self.widget_type {
            canvas::WidgetType::Battery => gr::Battery { volts: self.value },
            canvas::WidgetType::Resistor => gr::Resistor { ohms: self.value },
            canvas::WidgetType::VariableResistor => gr::VariableResistor { ohms: self.value },
            canvas::WidgetType::Thermistor => gr::Thermistor { ohms: self.value },
            canvas::WidgetType::Switch => gr::Switch { closed: self.switched_on },
            canvas::WidgetType::Voltmeter => gr::Voltmeter,
            canvas::WidgetType::Ammeter => gr::Ammeter,
            canvas::WidgetType::Lightbulb => gr::Lightbulb,
        }
    }
}
```

</details>
*/
pub trait Node {
    /// Returns the component id of the component.
    fn component_id(&self) -> u64;
    /// Returns the kind of the component.
    fn kind(&self) -> ComponentKind;
}

/**
This trait needs to be implemented by the type that represents a wire.

Wires are undirected: `source` and `destination` only name the two ends.

Read more about why this is necessary [here][crate#the-node-and-edge-traits].

<details>
<summary>Example implementation for a canvas line record:</summary>

```ignore
impl dc_circuit_graph::Edge for canvas::Line {
    fn source(&self) -> u64 {
        self.tag_a
    }

    fn destination(&self) -> u64 {
        self.tag_b
    }

    fn is_parallel_junction(&self) -> bool {
        self.battery_to_parallel
    }
}
```

</details>
*/
pub trait Edge {
    /// Returns the component id of one end of the wire.
    fn source(&self) -> u64;
    /// Returns the component id of the other end of the wire.
    fn destination(&self) -> u64;
    /// Returns true if the wire connects the battery directly to a parallel
    /// component.
    ///
    /// Both ends of such a wire are junctions of a parallel section, so they
    /// are never reported as dead ends even when they have a single wire.
    fn is_parallel_junction(&self) -> bool {
        false
    }
}
