//! Command line interface

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::io::{read_netlist_file, write_dot_file, write_verilog_file};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Selected subcommand
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Run the selected command
    pub fn run(&self) {
        match &self.command {
            Commands::Show(a) => a.run(),
            Commands::Verilog(a) => a.run(),
            Commands::Dot(a) => a.run(),
            Commands::Convert(a) => a.run(),
        }
    }
}

/// Command line arguments
#[derive(Subcommand)]
pub enum Commands {
    /// Show the contents of a netlist
    ///
    /// Will print the model name, inputs, outputs and the truth table of
    /// every gate.
    #[clap()]
    Show(ShowArgs),

    /// Convert a netlist to a structural Verilog module
    ///
    /// Each gate becomes one continuous assignment of a sum-of-products
    /// expression over its input signals.
    #[clap(alias = "v")]
    Verilog(VerilogArgs),

    /// Convert a netlist to a Graphviz graph of the signal flow
    ///
    /// Inverting or multi-row gates are drawn with an open dot arrowhead on
    /// their fan-in edges.
    #[clap(alias = "graph")]
    Dot(DotArgs),

    /// Generate both output forms from a single parse
    ///
    /// The Verilog and graph passes run independently: a failure in one does
    /// not prevent the other from completing.
    #[clap(alias = "gen")]
    Convert(ConvertArgs),
}

/// Command arguments for showing a netlist
#[derive(Args)]
pub struct ShowArgs {
    /// Netlist to show
    file: PathBuf,
}

impl ShowArgs {
    /// Print the parsed netlist to stdout
    pub fn run(&self) {
        match read_netlist_file(&self.file) {
            Ok(net) => print!("{}", net),
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        }
    }
}

/// Command arguments for Verilog generation
#[derive(Args)]
pub struct VerilogArgs {
    /// Netlist to convert
    file: PathBuf,

    /// Output file for the Verilog module
    #[arg(short = 'o', long)]
    output: PathBuf,
}

impl VerilogArgs {
    /// Parse the netlist and emit the Verilog module
    pub fn run(&self) {
        let res =
            read_netlist_file(&self.file).and_then(|net| write_verilog_file(&self.output, &net));
        if let Err(err) = res {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

/// Command arguments for graph generation
#[derive(Args)]
pub struct DotArgs {
    /// Netlist to convert
    file: PathBuf,

    /// Output file for the Graphviz graph
    #[arg(short = 'o', long)]
    output: PathBuf,
}

impl DotArgs {
    /// Parse the netlist and emit the Graphviz graph
    pub fn run(&self) {
        let res = read_netlist_file(&self.file).and_then(|net| write_dot_file(&self.output, &net));
        if let Err(err) = res {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

/// Command arguments for combined generation
#[derive(Args)]
pub struct ConvertArgs {
    /// Netlist to convert
    file: PathBuf,

    /// Output file for the Verilog module
    #[arg(short = 'v', long)]
    verilog: Option<PathBuf>,

    /// Output file for the Graphviz graph
    #[arg(short = 'd', long)]
    dot: Option<PathBuf>,
}

impl ConvertArgs {
    /// Parse once and run the requested generation passes
    pub fn run(&self) {
        let net = match read_netlist_file(&self.file) {
            Ok(net) => net,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        };
        let mut failed = false;
        if let Some(path) = &self.verilog {
            if let Err(err) = write_verilog_file(path, &net) {
                eprintln!("{}", err);
                failed = true;
            }
        }
        if let Some(path) = &self.dot {
            if let Err(err) = write_dot_file(path, &net) {
                eprintln!("{}", err);
                failed = true;
            }
        }
        if failed {
            std::process::exit(1);
        }
    }
}
