use core::fmt;

/// One truth-table row of a gate: an input pattern over `{0, 1, -}` and the
/// output value for patterns it matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Input pattern; position i corresponds to the gate's i-th input
    pub pattern: String,
    /// Output value when the pattern matches
    pub value: bool,
}

impl Row {
    /// Create a new truth-table row
    pub fn new(pattern: impl Into<String>, value: bool) -> Self {
        Row {
            pattern: pattern.into(),
            value,
        }
    }

    /// Literal at input column i: `Some(true)` for '1', `Some(false)` for '0',
    /// `None` for don't-care
    ///
    /// Positions past the end of the pattern read as don't-care, so rows
    /// shorter than the gate's input list never cause an out-of-range access.
    pub fn literal(&self, i: usize) -> Option<bool> {
        match self.pattern.as_bytes().get(i) {
            Some(b'1') => Some(true),
            Some(b'0') => Some(false),
            _ => None,
        }
    }
}

/// A single-output logic gate defined by its truth table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gate {
    inputs: Vec<String>,
    output: String,
    rows: Vec<Row>,
}

impl Gate {
    /// Create a gate from its input signal names and output signal name
    pub fn new(inputs: Vec<String>, output: String) -> Self {
        Gate {
            inputs,
            output,
            rows: Vec::new(),
        }
    }

    /// Return the number of inputs
    pub fn nb_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Get the input signal name at index i
    pub fn input(&self, i: usize) -> &str {
        &self.inputs[i]
    }

    /// Input signal names, in truth-table column order
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Output signal name
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Truth-table rows, in declaration order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Append a truth-table row
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }
}

/// A combinational logic network: named inputs and outputs, and gates defined
/// by truth tables
///
/// The netlist is a permissive container. It keeps signals in declaration
/// order and performs no cross-reference checking: a gate may mention signals
/// that are declared nowhere, and nothing verifies that the network is
/// acyclic.
#[derive(Debug, Clone, Default)]
pub struct Netlist {
    name: String,
    inputs: Vec<String>,
    outputs: Vec<String>,
    gates: Vec<Gate>,
}

impl Netlist {
    /// Create a new empty netlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Model name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the model name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Return the number of primary inputs
    pub fn nb_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Return the number of primary outputs
    pub fn nb_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// Return the number of gates
    pub fn nb_gates(&self) -> usize {
        self.gates.len()
    }

    /// Get the primary input name at index i
    pub fn input(&self, i: usize) -> &str {
        &self.inputs[i]
    }

    /// Get the primary output name at index i
    pub fn output(&self, i: usize) -> &str {
        &self.outputs[i]
    }

    /// Get the gate at index i
    pub fn gate(&self, i: usize) -> &Gate {
        &self.gates[i]
    }

    /// Primary input names, in declaration order
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Primary output names, in declaration order
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Gates, in declaration order
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Return whether a name is a declared primary output
    pub fn is_output(&self, name: &str) -> bool {
        self.outputs.iter().any(|o| o == name)
    }

    /// Declare primary inputs
    pub fn add_inputs<I: IntoIterator<Item = String>>(&mut self, names: I) {
        self.inputs.extend(names);
    }

    /// Declare primary outputs
    pub fn add_outputs<I: IntoIterator<Item = String>>(&mut self, names: I) {
        self.outputs.extend(names);
    }

    /// Add a fully-built gate
    pub fn add_gate(&mut self, gate: Gate) {
        self.gates.push(gate);
    }
}

impl fmt::Display for Netlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model: {}", self.name)?;
        writeln!(f, "Inputs: {}", self.inputs.join(" "))?;
        writeln!(f, "Outputs: {}", self.outputs.join(" "))?;
        writeln!(f, "Gates:")?;
        for g in &self.gates {
            writeln!(f, "\t{} <- {}", g.output(), g.inputs().join(" "))?;
            for r in g.rows() {
                writeln!(f, "\t\t{} {}", r.pattern, if r.value { "1" } else { "0" })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut net = Netlist::new();
        net.set_name("adder");
        net.add_inputs(vec!["a".to_string(), "b".to_string()]);
        net.add_outputs(vec!["s".to_string()]);
        let mut g = Gate::new(vec!["a".to_string(), "b".to_string()], "s".to_string());
        g.add_row(Row::new("11", true));
        net.add_gate(g);

        assert_eq!(net.name(), "adder");
        assert_eq!(net.nb_inputs(), 2);
        assert_eq!(net.nb_outputs(), 1);
        assert_eq!(net.nb_gates(), 1);
        assert_eq!(net.input(0), "a");
        assert_eq!(net.output(0), "s");
        assert_eq!(net.gate(0).output(), "s");
        assert!(net.is_output("s"));
        assert!(!net.is_output("a"));
    }

    #[test]
    fn test_empty_directives() {
        let mut net = Netlist::new();
        net.add_inputs(Vec::new());
        net.add_outputs(Vec::new());
        assert_eq!(net.nb_inputs(), 0);
        assert_eq!(net.nb_outputs(), 0);
    }

    #[test]
    fn test_row_literals() {
        let r = Row::new("10-", true);
        assert_eq!(r.literal(0), Some(true));
        assert_eq!(r.literal(1), Some(false));
        assert_eq!(r.literal(2), None);
        // Reading past the pattern is a don't-care, not a panic
        assert_eq!(r.literal(3), None);
    }
}
