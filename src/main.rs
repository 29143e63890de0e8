use blifgen::cmd::Cli;
use clap::Parser;

fn main() {
    Cli::parse().run();
}
