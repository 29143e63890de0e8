//! Sum-of-products expression synthesis from truth tables

use itertools::Itertools;

use crate::netlist::{Gate, Row};

/// Verilog spelling of the constant-0 expression, used for a gate whose truth
/// table has no 1-valued row
pub const CONST_ZERO: &str = "1'b0";

/// Verilog spelling of the constant-1 expression, used for a term with no
/// literals (all positions don't-care)
pub const CONST_ONE: &str = "1'b1";

/// Build one AND-term from a truth-table row
///
/// Column i contributes the literal `inputs[i]` for '1', `!inputs[i]` for
/// '0', and nothing for '-'. Positions missing from a short pattern read as
/// don't-care; pattern positions past the input count are ignored.
fn term(gate: &Gate, row: &Row) -> String {
    let literals = (0..gate.nb_inputs())
        .filter_map(|i| {
            row.literal(i)
                .map(|v| (if v { "" } else { "!" }).to_string() + gate.input(i))
        })
        .collect::<Vec<_>>();
    if literals.is_empty() {
        CONST_ONE.to_string()
    } else {
        literals.iter().join(" & ")
    }
}

/// Synthesize the sum-of-products expression for a gate
///
/// One AND-term per 1-valued truth-table row, joined with OR in row order;
/// literals within a term follow input-column order. No minimization is
/// applied beyond skipping don't-care columns, so identical truth tables
/// always synthesize identical expressions.
///
/// A gate with no 1-valued row yields the constant `1'b0` rather than a
/// dangling operator.
pub fn sop_expression(gate: &Gate) -> String {
    let terms = gate
        .rows()
        .iter()
        .filter(|r| r.value)
        .map(|r| term(gate, r))
        .collect::<Vec<_>>();
    if terms.is_empty() {
        CONST_ZERO.to_string()
    } else {
        terms.iter().join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlist::{Gate, Row};

    fn gate(inputs: &[&str], rows: &[(&str, bool)]) -> Gate {
        let mut g = Gate::new(
            inputs.iter().map(|s| s.to_string()).collect(),
            "y".to_string(),
        );
        for (p, v) in rows {
            g.add_row(Row::new(*p, *v));
        }
        g
    }

    #[test]
    fn test_and() {
        let g = gate(&["a", "b"], &[("11", true)]);
        assert_eq!(sop_expression(&g), "a & b");
    }

    #[test]
    fn test_dont_care_column() {
        let g = gate(&["a", "b"], &[("1-", true)]);
        assert_eq!(sop_expression(&g), "a");
    }

    #[test]
    fn test_xor_shape() {
        let g = gate(&["a", "b"], &[("10", true), ("01", true)]);
        assert_eq!(sop_expression(&g), "a & !b | !a & b");
    }

    #[test]
    fn test_term_count_matches_one_rows() {
        let g = gate(
            &["a", "b", "c"],
            &[("111", true), ("000", false), ("1--", true), ("0-1", true)],
        );
        let expr = sop_expression(&g);
        assert_eq!(expr.matches('|').count() + 1, 3);
        assert_eq!(expr, "a & b & c | a | !a & c");
    }

    #[test]
    fn test_zero_rows() {
        let g = gate(&["a", "b"], &[]);
        assert_eq!(sop_expression(&g), "1'b0");
    }

    #[test]
    fn test_only_zero_valued_rows() {
        let g = gate(&["a", "b"], &[("11", false)]);
        assert_eq!(sop_expression(&g), "1'b0");
    }

    #[test]
    fn test_all_dont_care() {
        let g = gate(&["a", "b", "c"], &[("---", true)]);
        assert_eq!(sop_expression(&g), "1'b1");
    }

    #[test]
    fn test_empty_pattern() {
        // A zero-input gate row, as in ".names y" / "1"
        let g = gate(&[], &[("", true)]);
        assert_eq!(sop_expression(&g), "1'b1");
    }

    #[test]
    fn test_short_row_reads_as_dont_care() {
        let g = gate(&["a", "b", "c"], &[("1", true)]);
        assert_eq!(sop_expression(&g), "a");
    }

    #[test]
    fn test_long_row_extra_ignored() {
        let g = gate(&["a"], &[("10", true)]);
        assert_eq!(sop_expression(&g), "a");
    }
}
