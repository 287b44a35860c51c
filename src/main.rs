pub mod cli;
pub mod diag;
pub mod error;
pub mod extract;
pub mod person;
pub mod pipeline;
pub mod reader;
pub mod tree;

fn main() -> anyhow::Result<()> {
    let command_line_interface = cli::CommandLineInterface::load();
    command_line_interface.run()
}
