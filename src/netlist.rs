//! Representation of a gate-level netlist with named signals

mod model;

pub use model::{Gate, Netlist, Row};
