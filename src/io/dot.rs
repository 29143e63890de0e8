//! Writer for Graphviz signal-flow graphs

use std::io::{self, Write};

use crate::graph::{edge_style, NodeIds};
use crate::netlist::Netlist;

/// Graphviz node name of a signal's fan-out point
fn fanout_point(name: &str) -> String {
    format!("{}_fp", name)
}

/// Write a netlist as a Graphviz digraph
///
/// The graph flows left to right. Each primary input gets a box-shaped node
/// plus a small fan-out point that downstream edges start from; each gate
/// output gets a node labeled with its assigned identity and name. All
/// fan-in edges of one gate share a single arrowhead derived from the gate's
/// truth-table shape (see [`edge_style`]).
pub fn write_dot<W: Write>(w: &mut W, net: &Netlist) -> io::Result<()> {
    let ids = NodeIds::assign(net);

    writeln!(w, "digraph \"{}\" {{", net.name())?;
    writeln!(w, "rankdir=LR;")?;
    writeln!(w, "node [shape=circle, width=0.5];")?;

    // Primary inputs and their fan-out points
    for name in net.inputs() {
        writeln!(w, "\"{}\" [label=\"{}\", shape=box];", name, ids.label(name))?;
        writeln!(w, "\"{}\" [shape=point];", fanout_point(name))?;
        writeln!(w, "\"{}\" -> \"{}\" [arrowhead=none];", name, fanout_point(name))?;
    }

    // Primary outputs and the gates driving them
    for name in net.outputs() {
        writeln!(w, "\"{}\" [label=\"{}\"];", name, ids.label(name))?;
        for gate in net.gates().iter().filter(|g| g.output() == name.as_str()) {
            let style = edge_style(net, gate);
            for input in gate.inputs() {
                writeln!(
                    w,
                    "\"{}\" -> \"{}\" [arrowhead={}];",
                    fanout_point(input),
                    name,
                    style.arrowhead()
                )?;
            }
        }
    }

    // Internal gates, with their own fan-out points
    for gate in net.gates().iter().filter(|g| !net.is_output(g.output())) {
        let name = gate.output();
        let style = edge_style(net, gate);
        writeln!(w, "\"{}\" [label=\"{}\"];", name, ids.label(name))?;
        writeln!(w, "\"{}\" [shape=point];", fanout_point(name))?;
        writeln!(w, "\"{}\" -> \"{}\" [arrowhead=none];", name, fanout_point(name))?;
        for input in gate.inputs() {
            writeln!(
                w,
                "\"{}\" -> \"{}\" [arrowhead={}];",
                fanout_point(input),
                name,
                style.arrowhead()
            )?;
        }
    }

    writeln!(w, "}}")?;
    Ok(())
}

/// Render the digraph to a string
pub fn dot_to_string(net: &Netlist) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec<u8> cannot fail
    write_dot(&mut buf, net).unwrap();
    String::from_utf8(buf).unwrap()
}
