//! Node identities and edge styles for the signal-flow graph

use fxhash::FxHashMap;

use crate::netlist::{Gate, Netlist};

/// Arrowhead style of a gate's fan-in edges
///
/// One style per gate: every edge into a gate's output node carries the same
/// arrowhead, derived from the shape of the gate's truth table rather than
/// from per-literal polarity. This matches the original visualization
/// contract and is deliberately coarse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    /// Plain, non-inverting arrowhead
    None,
    /// Open-dot arrowhead marking an inverting or multi-row gate
    OpenDot,
}

impl EdgeStyle {
    /// Graphviz `arrowhead` attribute value
    pub fn arrowhead(&self) -> &'static str {
        match self {
            EdgeStyle::None => "none",
            EdgeStyle::OpenDot => "odot",
        }
    }
}

/// Dense integer identities for every distinct signal in a netlist
///
/// Identities are handed out in declaration order: primary inputs first,
/// then primary outputs not already seen, then gate outputs not already
/// seen. The ordering is part of the graph output contract: node labels
/// embed these numbers.
#[derive(Debug, Clone, Default)]
pub struct NodeIds {
    ids: FxHashMap<String, u32>,
}

impl NodeIds {
    /// Assign identities for every signal of a netlist
    pub fn assign(net: &Netlist) -> Self {
        let mut ids = FxHashMap::default();
        let mut next = 0u32;
        let mut claim = |ids: &mut FxHashMap<String, u32>, name: &str| {
            if !ids.contains_key(name) {
                ids.insert(name.to_string(), next);
                next += 1;
            }
        };
        for name in net.inputs() {
            claim(&mut ids, name);
        }
        for name in net.outputs() {
            claim(&mut ids, name);
        }
        for gate in net.gates() {
            claim(&mut ids, gate.output());
        }
        NodeIds { ids }
    }

    /// Identity of a signal, if it was assigned one
    pub fn get(&self, name: &str) -> Option<u32> {
        self.ids.get(name).copied()
    }

    /// Number of distinct signals
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Return whether no signal was assigned
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Node label for a signal: the identity and the name together
    ///
    /// Signals that never received an identity (mentioned as a gate input
    /// but declared nowhere) are labeled with `?` instead of a number.
    pub fn label(&self, name: &str) -> String {
        match self.get(name) {
            Some(id) => format!("{}:{}", id, name),
            None => format!("?:{}", name),
        }
    }
}

/// Derive the fan-in edge style of a gate
///
/// A gate driving a declared primary output is styled from its first
/// truth-table row only: a 1-valued first row is non-inverting, a 0-valued
/// one inverting. An internal gate is styled from its row count: more than
/// one row means open-dot. A gate with no rows defaults to non-inverting.
pub fn edge_style(net: &Netlist, gate: &Gate) -> EdgeStyle {
    if net.is_output(gate.output()) {
        match gate.rows().first() {
            Some(row) if !row.value => EdgeStyle::OpenDot,
            _ => EdgeStyle::None,
        }
    } else if gate.rows().len() > 1 {
        EdgeStyle::OpenDot
    } else {
        EdgeStyle::None
    }
}
