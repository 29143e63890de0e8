//! BLIF netlist conversion tools
//!
//! This crate reads combinational logic networks in the
//! [BLIF](https://course.ece.cmu.edu/~ee760/760docs/blif.pdf) format and
//! re-expresses them in two independent forms: a structural Verilog module
//! built from sum-of-products expressions, and a Graphviz digraph of the
//! signal flow with polarity-sensitive edge styling.
//!
//! ```bash
//! # Show the parsed netlist
//! blifgen show design.blif
//! # Generate a Verilog module
//! blifgen verilog design.blif -o design.v
//! # Generate a Graphviz graph
//! blifgen dot design.blif -o design.dot
//! # Or both from a single parse
//! blifgen convert design.blif -v design.v -d design.dot
//! ```
//!
//! # Design
//!
//! Everything operates on a single read-only datastructure, [`Netlist`]:
//! named signals, and truth-table gates in declaration order. The generators
//! never mutate it and never interact with each other, so each output pass
//! succeeds or fails on its own.
//!
//! The netlist is a permissive container by design. It performs no logic
//! minimization beyond skipping don't-care columns, no clock or latch
//! semantics (the emitted module carries unused `clk`/`rst` ports), and no
//! validation that referenced signals are declared or that the network is
//! acyclic.
//!
//! ```
//! # use blifgen::netlist::{Gate, Netlist, Row};
//! # use blifgen::sop::sop_expression;
//! let mut net = Netlist::new();
//! net.set_name("and2");
//! net.add_inputs(vec!["a".to_string(), "b".to_string()]);
//! net.add_outputs(vec!["c".to_string()]);
//! let mut g = Gate::new(vec!["a".to_string(), "b".to_string()], "c".to_string());
//! g.add_row(Row::new("11", true));
//! assert_eq!(sop_expression(&g), "a & b");
//! net.add_gate(g);
//! ```

#![warn(missing_docs)]

pub mod cmd;
pub mod graph;
pub mod io;
pub mod netlist;
pub mod sop;

pub use netlist::{Gate, Netlist, Row};
