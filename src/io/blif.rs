//! Reader for .blif netlist files

use std::io::{BufRead, BufReader, Read};

use crate::netlist::{Gate, Netlist, Row};

enum Statement {
    Model(String),
    Inputs(Vec<String>),
    Outputs(Vec<String>),
    Names(Vec<String>),
    Cube(String),
    End,
}

fn read_single_statement(tokens: Vec<&str>) -> Result<Statement, String> {
    match tokens[0] {
        ".model" => {
            if tokens.len() < 2 {
                return Err(".model statement with no name".to_owned());
            }
            Ok(Statement::Model(tokens[1].to_owned()))
        }
        ".inputs" => Ok(Statement::Inputs(
            tokens[1..].iter().map(|s| (*s).to_owned()).collect(),
        )),
        ".outputs" => Ok(Statement::Outputs(
            tokens[1..].iter().map(|s| (*s).to_owned()).collect(),
        )),
        ".names" => Ok(Statement::Names(
            tokens[1..].iter().map(|s| (*s).to_owned()).collect(),
        )),
        ".end" => Ok(Statement::End),
        _ => {
            if tokens[0].starts_with('.') {
                Err(format!("{} construct is not supported", tokens[0]))
            } else {
                Ok(Statement::Cube(tokens.join(" ")))
            }
        }
    }
}

fn read_statements<R: Read>(r: R) -> Result<Vec<Statement>, String> {
    let mut ret: Vec<Statement> = Vec::new();

    // Buffer for multi-line statements
    let mut ss = String::new();

    for l in BufReader::new(r).lines() {
        let s = l.map_err(|e| format!("Read error: {}", e))?;
        let comment_pos = s.find('#');

        // Extend multi-line buffers
        ss += " ";
        ss += &s[0..comment_pos.unwrap_or(s.len())];

        let is_continuation = comment_pos.is_none() && ss.ends_with('\\');
        if is_continuation {
            ss.pop();
        }
        if is_continuation || ss.is_empty() {
            continue;
        }

        let tokens: Vec<_> = ss.split_whitespace().collect();
        if !tokens.is_empty() {
            ret.push(read_single_statement(tokens)?);
        }
        ss.clear();
    }

    // Handle a line continuation at the end of the file
    let tokens: Vec<_> = ss.split_whitespace().collect();
    if !tokens.is_empty() {
        ret.push(read_single_statement(tokens)?);
    }
    Ok(ret)
}

fn parse_cube(s: &str) -> Result<Row, String> {
    let t = s.split_whitespace().collect::<Vec<_>>();
    let (pattern, val) = if t.len() == 2 {
        (t[0], t[1])
    } else if t.len() == 1 {
        ("", t[0])
    } else {
        return Err(format!("Invalid truth table row: {}", s));
    };
    for c in pattern.bytes() {
        if c != b'0' && c != b'1' && c != b'-' {
            return Err(format!("Invalid truth table row: {}", s));
        }
    }
    let value = match val {
        "0" => false,
        "1" => true,
        _ => return Err(format!("Invalid truth table row: {}", s)),
    };
    Ok(Row::new(pattern, value))
}

fn build_netlist(statements: &[Statement]) -> Result<Netlist, String> {
    let mut ret = Netlist::new();
    let mut found_model = false;
    let mut current: Option<Gate> = None;

    for statement in statements {
        match statement {
            Statement::Model(name) => {
                if found_model {
                    return Err("Multiple models in the same file are not supported".to_owned());
                }
                found_model = true;
                ret.set_name(name.clone());
            }
            Statement::Inputs(inputs) => ret.add_inputs(inputs.iter().cloned()),
            Statement::Outputs(outputs) => ret.add_outputs(outputs.iter().cloned()),
            Statement::Names(names) => {
                if let Some(gate) = current.take() {
                    ret.add_gate(gate);
                }
                let Some((output, inputs)) = names.split_last() else {
                    return Err(".names statement with no output".to_owned());
                };
                // The trailing token is the output, everything before it an input
                current = Some(Gate::new(inputs.to_vec(), output.clone()));
            }
            Statement::Cube(s) => match &mut current {
                Some(gate) => gate.add_row(parse_cube(s)?),
                None => return Err(format!("Truth table row outside a .names block: {}", s)),
            },
            Statement::End => break,
        }
    }

    // Flush the last open gate, whether ended by .end or end of file
    if let Some(gate) = current.take() {
        ret.add_gate(gate);
    }
    Ok(ret)
}

/// Read a netlist in .blif format
///
/// The format specification is available
/// [here](https://course.ece.cmu.edu/~ee760/760docs/blif.pdf).
/// Only the combinational subset is supported: a single `.model` with
/// `.inputs`, `.outputs` and `.names` blocks. Lines starting with `#` are
/// comments, and a trailing `\` continues a statement on the next line.
pub fn read_blif<R: Read>(r: R) -> Result<Netlist, String> {
    let statements = read_statements(r)?;
    build_netlist(&statements)
}
