//! Writer for structural Verilog modules

use std::io::{self, Write};

use itertools::Itertools;

use crate::netlist::Netlist;
use crate::sop::sop_expression;

/// Every distinct signal name, first-seen order: inputs, then outputs, then
/// remaining gate outputs
fn distinct_signals(net: &Netlist) -> Vec<&str> {
    let mut ret: Vec<&str> = Vec::new();
    let all = net
        .inputs()
        .iter()
        .chain(net.outputs())
        .map(|s| s.as_str())
        .chain(net.gates().iter().map(|g| g.output()));
    for name in all {
        // Netlists are small; a linear scan keeps first-seen order for free
        if !ret.contains(&name) {
            ret.push(name);
        }
    }
    ret
}

/// Write a netlist as a structural Verilog module
///
/// The module header lists `clk` and `rst` first, then the declared outputs,
/// then the declared inputs. `clk` and `rst` are always present even though
/// the combinational body never reads them. Each gate becomes one continuous
/// assignment of its sum-of-products expression, in gate declaration order;
/// no dependency reordering is performed.
pub fn write_verilog<W: Write>(w: &mut W, net: &Netlist) -> io::Result<()> {
    let ports = net
        .outputs()
        .iter()
        .chain(net.inputs())
        .map(|s| s.as_str())
        .join(", ");
    if ports.is_empty() {
        writeln!(w, "module {}(clk, rst);", net.name())?;
    } else {
        writeln!(w, "module {}(clk, rst, {});", net.name(), ports)?;
    }
    writeln!(w, "input clk, rst;")?;
    for name in net.outputs() {
        writeln!(w, "output {};", name)?;
    }
    for name in net.inputs() {
        writeln!(w, "input {};", name)?;
    }
    for name in distinct_signals(net) {
        writeln!(w, "wire {};", name)?;
    }
    for gate in net.gates() {
        writeln!(w, "assign {} = {};", gate.output(), sop_expression(gate))?;
    }
    writeln!(w, "endmodule")?;
    Ok(())
}

/// Render the Verilog module to a string
pub fn verilog_to_string(net: &Netlist) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec<u8> cannot fail
    write_verilog(&mut buf, net).unwrap();
    String::from_utf8(buf).unwrap()
}

#[cfg(test)]
mod tests {
    use super::verilog_to_string;
    use crate::io::blif::read_blif;

    #[test]
    fn test_simple_module() {
        let example = ".model m\n.inputs a b\n.outputs c\n.names a b c\n11 1\n.end\n";
        let net = read_blif(example.as_bytes()).unwrap();
        let v = verilog_to_string(&net);
        assert_eq!(
            v,
            "module m(clk, rst, c, a, b);\n\
             input clk, rst;\n\
             output c;\n\
             input a;\n\
             input b;\n\
             wire a;\n\
             wire b;\n\
             wire c;\n\
             assign c = a & b;\n\
             endmodule\n"
        );
    }

    #[test]
    fn test_intermediate_wire() {
        let example = "\
.model xor2
.inputs a b
.outputs y
.names a b t
10 1
01 1
.names t y
1 1
.end
";
        let net = read_blif(example.as_bytes()).unwrap();
        let v = verilog_to_string(&net);
        assert!(v.contains("module xor2(clk, rst, y, a, b);"));
        // Intermediate gate outputs get a wire declaration after ports
        assert!(v.contains("wire t;"));
        assert!(v.contains("assign t = a & !b | !a & b;"));
        assert!(v.contains("assign y = t;"));
        // One wire per distinct signal, no duplicates
        assert_eq!(v.matches("wire ").count(), 4);
    }

    #[test]
    fn test_empty_truth_table_renders_constant() {
        let example = ".model m\n.inputs a\n.outputs y\n.names a y\n.end\n";
        let net = read_blif(example.as_bytes()).unwrap();
        let v = verilog_to_string(&net);
        assert!(v.contains("assign y = 1'b0;"));
    }

    #[test]
    fn test_portless_module() {
        let example = ".model empty\n.end\n";
        let net = read_blif(example.as_bytes()).unwrap();
        let v = verilog_to_string(&net);
        assert!(v.starts_with("module empty(clk, rst);\n"));
        assert!(v.ends_with("endmodule\n"));
    }
}
