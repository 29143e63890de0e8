//! Read netlists and write the generated outputs to files

pub mod blif;
pub mod dot;
pub mod verilog;

use std::fs::File;
use std::path::Path;

pub use blif::read_blif;
pub use dot::{dot_to_string, write_dot};
pub use verilog::{verilog_to_string, write_verilog};

use crate::netlist::Netlist;

/// Read a netlist from a file
///
/// Following extensions are supported: .blif
pub fn read_netlist_file(path: &Path) -> Result<Netlist, String> {
    let ext = path.extension().ok_or("No extension given")?;
    if ext != "blif" {
        return Err(format!("Unknown extension {}", ext.to_string_lossy()));
    }
    let f = File::open(path)
        .map_err(|e| format!("Failed to open the file {}: {}", path.display(), e))?;
    read_blif(f)
}

/// Write a netlist to a file as a structural Verilog module
pub fn write_verilog_file(path: &Path, net: &Netlist) -> Result<(), String> {
    let mut f = File::create(path)
        .map_err(|e| format!("Failed to create the file {}: {}", path.display(), e))?;
    write_verilog(&mut f, net)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

/// Write a netlist to a file as a Graphviz digraph
pub fn write_dot_file(path: &Path, net: &Netlist) -> Result<(), String> {
    let mut f = File::create(path)
        .map_err(|e| format!("Failed to create the file {}: {}", path.display(), e))?;
    write_dot(&mut f, net).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}
